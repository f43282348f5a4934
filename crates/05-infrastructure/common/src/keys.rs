//! 常用元数据键
//!
//! 公共标记函数与解析引擎约定的键名；引擎本身不解释它们的含义。

/// 具名依赖
pub const NAMED_TAG: &str = "named";

/// 注入点名称
pub const NAME_TAG: &str = "name";

/// 注入的服务标识符
pub const INJECT_TAG: &str = "inject";

/// 多实例注入的服务标识符
pub const MULTI_INJECT_TAG: &str = "multi_inject";

/// 可选依赖
pub const OPTIONAL_TAG: &str = "optional";

/// 不由容器管理的参数
pub const UNMANAGED_TAG: &str = "unmanaged";

/// 构造函数参数元数据的命名空间
pub const TAGGED: &str = "inject:tagged";

/// 实例属性元数据的命名空间
pub const TAGGED_PROP: &str = "inject:tagged_props";
