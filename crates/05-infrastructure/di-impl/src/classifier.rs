//! 目标分类
//!
//! 把一次标记调用的三个参数归类为构造函数参数、实例属性或类本身。
//! 纯函数，不读写存储。

use di_abstractions::{DecoratorCall, DecoratorTarget, IndexOrDescriptor};
use infrastructure_common::{MetadataError, MetadataResult, PropertyKey};
use tracing::warn;

/// 调用形态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetShape {
    /// 构造函数参数
    ///
    /// `property_key` 原样保留，由合法性检查拒绝。
    Parameter {
        target: DecoratorTarget,
        index: usize,
        property_key: Option<PropertyKey>,
    },
    /// 实例属性
    Property {
        target: DecoratorTarget,
        key: PropertyKey,
    },
    /// 类本身
    Class { target: DecoratorTarget },
}

/// 对标记调用进行分类
pub fn classify(call: &DecoratorCall) -> MetadataResult<TargetShape> {
    let shape = match (&call.index_or_descriptor, &call.property_key) {
        (Some(IndexOrDescriptor::Index(index)), property_key) => {
            let index = usize::try_from(*index).map_err(|_| invalid(call, "参数索引为负数"))?;
            // 没有属性键时，参数标记只能作用于类型本身
            if property_key.is_none() && !call.target.is_constructor() {
                return Err(invalid(call, "参数标记的目标不是构造函数"));
            }
            TargetShape::Parameter {
                target: call.target.clone(),
                index,
                property_key: property_key.clone(),
            }
        }
        (_, Some(key)) => TargetShape::Property {
            target: call.target.clone(),
            key: key.clone(),
        },
        (None, None) if call.target.is_constructor() => TargetShape::Class {
            target: call.target.clone(),
        },
        (_, None) => return Err(invalid(call, "缺少属性键")),
    };

    Ok(shape)
}

fn invalid(call: &DecoratorCall, reason: &str) -> MetadataError {
    warn!(
        "无法识别的标记调用: {} ({}), target={:?}",
        call.target.type_info(),
        reason,
        call.target
    );
    MetadataError::InvalidDecoratorOperation
}
