//! 合法性检查
//!
//! 防止本应写入一个存储桶的元数据被悄悄写进另一个存储桶。

use di_abstractions::DecoratorTarget;
use infrastructure_common::{MetadataError, MetadataResult, PropertyKey};
use tracing::warn;

/// 参数标记不能同时描述一个属性
pub fn ensure_parameter_context(property_key: Option<&PropertyKey>) -> MetadataResult<()> {
    if let Some(key) = property_key {
        warn!("参数标记携带了属性键: {}", key);
        return Err(MetadataError::InvalidDecoratorOperation);
    }
    Ok(())
}

/// 属性标记不能直接作用于类本身
pub fn ensure_property_context(target: &DecoratorTarget) -> MetadataResult<()> {
    if target.is_constructor() {
        warn!("属性标记被直接应用到类型: {}", target.type_info());
        return Err(MetadataError::InvalidDecoratorOperation);
    }
    Ok(())
}
