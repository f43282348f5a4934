//! 命令式应用标记
//!
//! 在不使用派生宏的场景下，以函数调用的方式把标记应用到参数、属性或类上。
//! 这里不做任何校验，全部交给被应用的标记本身。
//!
//! ```ignore
//! let named = create_tagged_decorator(MetadataEntry::new(keys::NAMED_TAG, "katana"));
//! decorate(&store, &named, DecoratorTarget::constructor_of::<Ninja>(), Some(DecorateSlot::Parameter(0)))?;
//! decorate(&store, &named, DecoratorTarget::prototype_of::<Ninja>(), Some("weapon".into()))?;
//! decorate(&store, &register_type, DecoratorTarget::constructor_of::<Ninja>(), None)?;
//! ```

use di_abstractions::{Decorator, DecoratorCall, DecoratorTarget, IndexOrDescriptor, MetadataStore};
use infrastructure_common::{MetadataResult, PropertyKey, Symbol};
use tracing::trace;

/// 标记应用的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecorateSlot {
    /// 构造函数参数
    Parameter(usize),
    /// 实例属性
    Property(PropertyKey),
}

impl From<usize> for DecorateSlot {
    fn from(index: usize) -> Self {
        Self::Parameter(index)
    }
}

impl From<&str> for DecorateSlot {
    fn from(name: &str) -> Self {
        Self::Property(PropertyKey::from(name))
    }
}

impl From<String> for DecorateSlot {
    fn from(name: String) -> Self {
        Self::Property(PropertyKey::from(name))
    }
}

impl From<Symbol> for DecorateSlot {
    fn from(symbol: Symbol) -> Self {
        Self::Property(PropertyKey::from(symbol))
    }
}

impl From<PropertyKey> for DecorateSlot {
    fn from(key: PropertyKey) -> Self {
        Self::Property(key)
    }
}

/// 把标记应用到目标上
///
/// - 参数位置：以参数标记的调用形态应用
/// - 属性位置：以属性标记的调用形态应用
/// - 省略位置：以类标记的调用形态应用
pub fn decorate(
    store: &dyn MetadataStore,
    decorator: &dyn Decorator,
    target: DecoratorTarget,
    slot: Option<DecorateSlot>,
) -> MetadataResult<()> {
    let call = match slot {
        Some(DecorateSlot::Parameter(index)) => DecoratorCall {
            target,
            property_key: None,
            index_or_descriptor: Some(IndexOrDescriptor::position(index)),
        },
        Some(DecorateSlot::Property(key)) => DecoratorCall::property(target, key),
        None => DecoratorCall::class(target),
    };

    trace!("应用标记: {:?}", call);
    decorator.apply(store, call)
}

/// 把多个标记应用到同一位置
///
/// 与叠加书写的标记一致，列表中最后一个最先应用；遇到第一个错误即停止。
pub fn decorate_all(
    store: &dyn MetadataStore,
    decorators: &[&dyn Decorator],
    target: DecoratorTarget,
    slot: Option<DecorateSlot>,
) -> MetadataResult<()> {
    for decorator in decorators.iter().rev() {
        decorate(store, *decorator, target.clone(), slot.clone())?;
    }
    Ok(())
}
