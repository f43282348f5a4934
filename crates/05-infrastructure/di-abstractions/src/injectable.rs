//! 声明式注册接口

use crate::store::MetadataStore;
use infrastructure_common::{MetadataResult, TypeInfo};

/// 可注入类型 trait
///
/// 通常由 `#[derive(Injectable)]` 生成：命名字段注册为实例属性元数据，
/// 元组字段按位置注册为构造函数参数元数据。
pub trait Injectable: 'static {
    /// 把类型上声明的全部标记写入存储
    fn register_metadata(store: &dyn MetadataStore) -> MetadataResult<()>;

    /// 标记目标
    fn annotation_target() -> TypeInfo
    where
        Self: Sized,
    {
        TypeInfo::of::<Self>()
    }
}
