//! 标记入口
//!
//! 参数与属性两个显式入口，以及按调用形态分派的 [`TaggedDecorator`]。
//! 流程固定为：分类 → 合法性检查 → 重复键检查 → 写入存储。

use crate::classifier::{self, TargetShape};
use crate::guard;
use di_abstractions::{
    parameter_slot, Decorator, DecoratorCall, DecoratorTarget, MetadataStore, StorageBucket,
};
use infrastructure_common::{
    MetadataError, MetadataPayload, MetadataResult, PropertyKey, TypeInfo,
};
use tracing::warn;

/// 为构造函数参数添加元数据
///
/// `property_key` 必须为空：参数标记不能同时描述一个属性。
pub fn tag_parameter(
    store: &dyn MetadataStore,
    target: &TypeInfo,
    property_key: Option<&PropertyKey>,
    index: usize,
    metadata: impl Into<MetadataPayload>,
) -> MetadataResult<()> {
    guard::ensure_parameter_context(property_key)?;
    store.append_entries(
        target,
        StorageBucket::Parameter,
        parameter_slot(index),
        metadata.into(),
    )
}

/// 为实例属性添加元数据
///
/// 目标必须是实例成员，直接作用于类型本身会被拒绝。
pub fn tag_property(
    store: &dyn MetadataStore,
    target: &DecoratorTarget,
    property_key: impl Into<PropertyKey>,
    metadata: impl Into<MetadataPayload>,
) -> MetadataResult<()> {
    guard::ensure_property_context(target)?;
    store.append_entries(
        target.type_info(),
        StorageBucket::Property,
        property_key.into(),
        metadata.into(),
    )
}

/// 携带固定元数据的标记
///
/// 应用在参数位置时写入参数存储桶，应用在属性位置时写入属性存储桶。
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedDecorator {
    metadata: MetadataPayload,
}

impl TaggedDecorator {
    pub fn metadata(&self) -> &MetadataPayload {
        &self.metadata
    }
}

impl Decorator for TaggedDecorator {
    fn apply(&self, store: &dyn MetadataStore, call: DecoratorCall) -> MetadataResult<()> {
        match classifier::classify(&call)? {
            TargetShape::Parameter {
                target,
                index,
                property_key,
            } => tag_parameter(
                store,
                target.type_info(),
                property_key.as_ref(),
                index,
                self.metadata.clone(),
            ),
            TargetShape::Property { target, key } => {
                tag_property(store, &target, key, self.metadata.clone())
            }
            TargetShape::Class { target } => {
                warn!("元数据标记不能直接应用到类型: {}", target.type_info());
                Err(MetadataError::InvalidDecoratorOperation)
            }
        }
    }
}

/// 创建携带指定元数据的标记
pub fn create_tagged_decorator(metadata: impl Into<MetadataPayload>) -> TaggedDecorator {
    TaggedDecorator {
        metadata: metadata.into(),
    }
}
