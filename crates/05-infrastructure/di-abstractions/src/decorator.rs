//! 标记调用模型
//!
//! 一次标记调用由三部分组成：目标、可选的属性键、可选的参数索引或属性描述符。

use crate::store::MetadataStore;
use infrastructure_common::{MetadataResult, PropertyKey, TypeInfo};

/// 标记目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoratorTarget {
    /// 类型本身（构造函数），参数标记与类标记作用于此
    Constructor(TypeInfo),
    /// 类型的实例成员，属性标记作用于此
    Prototype(TypeInfo),
}

impl DecoratorTarget {
    pub fn constructor_of<T: 'static>() -> Self {
        Self::Constructor(TypeInfo::of::<T>())
    }

    pub fn prototype_of<T: 'static>() -> Self {
        Self::Prototype(TypeInfo::of::<T>())
    }

    /// 目标所属的类型
    pub fn type_info(&self) -> &TypeInfo {
        match self {
            Self::Constructor(info) | Self::Prototype(info) => info,
        }
    }

    /// 目标是否为类型本身
    pub fn is_constructor(&self) -> bool {
        matches!(self, Self::Constructor(_))
    }
}

/// 属性描述符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
}

impl Default for PropertyDescriptor {
    fn default() -> Self {
        Self {
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }
}

/// 第三个调用参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOrDescriptor {
    /// 构造函数参数位置，只接受非负值
    ///
    /// 取值范围覆盖全部 `usize`，负值在分类时被拒绝。
    Index(i128),
    /// 属性描述符
    Descriptor(PropertyDescriptor),
}

impl IndexOrDescriptor {
    /// 参数位置
    pub fn position(index: usize) -> Self {
        Self::Index(i128::try_from(index).unwrap_or(i128::MAX))
    }
}

/// 一次标记调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorCall {
    pub target: DecoratorTarget,
    pub property_key: Option<PropertyKey>,
    pub index_or_descriptor: Option<IndexOrDescriptor>,
}

impl DecoratorCall {
    /// 构造函数参数调用形态
    pub fn parameter(target: TypeInfo, index: usize) -> Self {
        Self {
            target: DecoratorTarget::Constructor(target),
            property_key: None,
            index_or_descriptor: Some(IndexOrDescriptor::position(index)),
        }
    }

    /// 实例属性调用形态
    pub fn property(target: DecoratorTarget, key: impl Into<PropertyKey>) -> Self {
        Self {
            target,
            property_key: Some(key.into()),
            index_or_descriptor: None,
        }
    }

    /// 类调用形态
    pub fn class(target: DecoratorTarget) -> Self {
        Self {
            target,
            property_key: None,
            index_or_descriptor: None,
        }
    }

    /// 附带属性键
    pub fn with_property_key(mut self, key: impl Into<PropertyKey>) -> Self {
        self.property_key = Some(key.into());
        self
    }

    /// 附带属性描述符
    pub fn with_descriptor(mut self, descriptor: PropertyDescriptor) -> Self {
        self.index_or_descriptor = Some(IndexOrDescriptor::Descriptor(descriptor));
        self
    }
}

/// 标记（装饰器）
///
/// 同一个标记可以出现在参数、属性或类的位置上，由调用形态决定含义。
pub trait Decorator: Send + Sync {
    fn apply(&self, store: &dyn MetadataStore, call: DecoratorCall) -> MetadataResult<()>;
}

impl<F> Decorator for F
where
    F: Fn(&dyn MetadataStore, DecoratorCall) -> MetadataResult<()> + Send + Sync,
{
    fn apply(&self, store: &dyn MetadataStore, call: DecoratorCall) -> MetadataResult<()> {
        self(store, call)
    }
}
