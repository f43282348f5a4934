//! 错误提示文本
//!
//! 引擎只负责选择错误种类并提供冲突的键，文本统一在这里维护。

/// 同一注入点上重复使用元数据键
pub const DUPLICATED_METADATA: &str = "元数据键在同一注入点上被重复使用:";

/// 标记被应用到了错误的位置
pub const INVALID_DECORATOR_OPERATION: &str =
    "@inject、@multi_inject、@tagged 与 @named 标记只能应用于类的构造函数参数或实例属性";
