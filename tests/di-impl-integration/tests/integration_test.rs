//! 元数据标记引擎端到端测试
//!
//! 模拟解析引擎的读取方式，并验证多线程下不同类型的注册互不干扰。

use di_abstractions::{Decorator, DecoratorTarget, MetadataReader, MetadataStore, StorageBucket};
use di_impl::{
    create_tagged_decorator, decorate, decorate_all, global_metadata_store, DecorateSlot,
    InMemoryMetadataStore, TargetMetadataBuilder,
};
use infrastructure_common::{keys, MetadataEntry, MetadataError, MetadataValue, PropertyKey, TypeInfo};
use std::sync::{Arc, Once};
use std::thread;

static INIT_LOGGER: Once = Once::new();

/// 初始化测试日志系统（只初始化一次）
fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .try_init()
            .ok();
        tracing::info!("测试日志系统已初始化");
    });
}

struct Katana;
struct Shuriken;
struct Ninja;

/// 简化的解析：按参数顺序取出每个参数的具名依赖
fn resolve_names(reader: &dyn MetadataReader, target: &TypeInfo, arity: usize) -> Vec<Option<String>> {
    (0..arity)
        .map(|index| {
            reader
                .parameter_metadata(target, index)
                .iter()
                .find(|entry| entry.key().as_name() == Some(keys::NAMED_TAG))
                .and_then(|entry| entry.value().as_str().map(str::to_string))
        })
        .collect()
}

#[test]
fn test_stacked_decorators_drive_resolution() {
    init_test_logger();
    let store = InMemoryMetadataStore::new();
    let ninja = DecoratorTarget::constructor_of::<Ninja>();

    let inject_katana = create_tagged_decorator(MetadataEntry::new(keys::INJECT_TAG, TypeInfo::of::<Katana>()));
    let named_primary = create_tagged_decorator(MetadataEntry::new(keys::NAMED_TAG, "primary"));
    let inject_shuriken = create_tagged_decorator(MetadataEntry::new(keys::INJECT_TAG, TypeInfo::of::<Shuriken>()));

    decorate_all(&store, &[&inject_katana, &named_primary], ninja.clone(), Some(DecorateSlot::Parameter(0))).unwrap();
    decorate(&store, &inject_shuriken, ninja.clone(), Some(DecorateSlot::Parameter(1))).unwrap();

    let target = TypeInfo::of::<Ninja>();
    assert_eq!(resolve_names(&store, &target, 2), vec![Some("primary".to_string()), None]);

    let first = store.parameter_metadata(&target, 0);
    assert_eq!(first[1].value(), &MetadataValue::Type(TypeInfo::of::<Katana>()));

    // 同一个参数再次注入会产生歧义
    let again = decorate(&store, &inject_shuriken, ninja, Some(DecorateSlot::Parameter(0)));
    assert_eq!(again, Err(MetadataError::duplicated(keys::INJECT_TAG)));
}

#[test]
fn test_class_decorator_through_adapter() {
    init_test_logger();
    let store = InMemoryMetadataStore::new();

    // 类标记：为全部参数登记未托管标记
    let unmanaged_all = |store: &dyn MetadataStore, call: di_abstractions::DecoratorCall| {
        let mut builder = TargetMetadataBuilder::new(call.target.type_info().clone());
        for index in 0..2 {
            builder = builder.parameter(index, MetadataEntry::new(keys::UNMANAGED_TAG, true));
        }
        builder.register(store)
    };

    decorate(&store, &unmanaged_all, DecoratorTarget::constructor_of::<Katana>(), None).unwrap();

    let katana = TypeInfo::of::<Katana>();
    let bucket = store.read_bucket(&katana, StorageBucket::Parameter);
    assert_eq!(bucket.len(), 2);
    assert!(store.read_bucket(&katana, StorageBucket::Property).is_empty());
}

#[test]
fn test_concurrent_registration_on_distinct_types() {
    init_test_logger();
    let store = Arc::new(InMemoryMetadataStore::new());

    macro_rules! register_on {
        ($ty:ty) => {{
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for index in 0..50 {
                    TargetMetadataBuilder::for_type::<$ty>()
                        .parameter(index, MetadataEntry::new(keys::NAMED_TAG, format!("p{index}")))
                        .property(format!("field{index}"), MetadataEntry::new(keys::OPTIONAL_TAG, true))
                        .register(store.as_ref())
                        .unwrap();
                }
            })
        }};
    }

    let handles = vec![register_on!(Katana), register_on!(Shuriken), register_on!(Ninja)];
    for handle in handles {
        handle.join().unwrap();
    }

    for target in [TypeInfo::of::<Katana>(), TypeInfo::of::<Shuriken>(), TypeInfo::of::<Ninja>()] {
        assert_eq!(store.read_bucket(&target, StorageBucket::Parameter).len(), 50);
        assert_eq!(store.read_bucket(&target, StorageBucket::Property).len(), 50);
        assert_eq!(
            store.property_metadata(&target, &PropertyKey::from("field7")),
            vec![MetadataEntry::new(keys::OPTIONAL_TAG, true)]
        );
    }
    assert_eq!(store.tagged_targets().len(), 3);
}

#[test]
fn test_concurrent_same_key_registration_admits_exactly_one() {
    let store = Arc::new(InMemoryMetadataStore::new());
    let decorator = Arc::new(create_tagged_decorator(MetadataEntry::new(keys::NAMED_TAG, "racer")));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let decorator = Arc::clone(&decorator);
            thread::spawn(move || {
                decorator.apply(
                    store.as_ref(),
                    di_abstractions::DecoratorCall::parameter(TypeInfo::of::<Ninja>(), 3),
                )
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(Result::is_ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(store.parameter_metadata(&TypeInfo::of::<Ninja>(), 3).len(), 1);
}

#[test]
fn test_concurrent_builders_commit_all_or_nothing() {
    init_test_logger();
    let store = Arc::new(InMemoryMetadataStore::new());

    let handles: Vec<_> = (0..8)
        .map(|index| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                TargetMetadataBuilder::for_type::<Shuriken>()
                    .parameter(index, MetadataEntry::new(keys::NAMED_TAG, format!("p{index}")))
                    .property("edge", MetadataEntry::new(keys::NAMED_TAG, format!("e{index}")))
                    .register(store.as_ref())
                    .is_ok()
            })
        })
        .collect();

    let outcomes: Vec<bool> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();

    assert_eq!(outcomes.iter().filter(|won| **won).count(), 1);
    let shuriken = TypeInfo::of::<Shuriken>();
    for (index, won) in outcomes.into_iter().enumerate() {
        assert_eq!(store.parameter_metadata(&shuriken, index).len(), usize::from(won));
    }
}

#[test]
fn test_global_store_is_shared() {
    struct GlobalOnly;

    TargetMetadataBuilder::for_type::<GlobalOnly>()
        .property("weapon", MetadataEntry::new(keys::NAMED_TAG, "global"))
        .register(global_metadata_store())
        .unwrap();

    assert_eq!(
        global_metadata_store().property_metadata(&TypeInfo::of::<GlobalOnly>(), &PropertyKey::from("weapon")),
        vec![MetadataEntry::new(keys::NAMED_TAG, "global")]
    );
}
