//! 派生宏的集成测试

use di_abstractions::{Injectable, MetadataReader, StorageBucket};
use di_impl::{global_metadata_store, InMemoryMetadataStore};
use infrastructure_common::{
    keys, Identifier, MetadataEntry, MetadataError, MetadataValue, PropertyKey, TypeInfo,
};
use injection_macros::Injectable;

pub struct Katana;

#[derive(Injectable)]
#[allow(dead_code)]
pub struct Ninja {
    #[inject(named = "katana")]
    #[inject(tagged(key = "can_throw", value = false))]
    weapon: Katana,
    #[inject(optional, tagged(key = "retries", value = 3))]
    retries: u32,
    level: u32,
}

#[derive(Injectable)]
#[allow(dead_code)]
pub struct Samurai(
    #[inject(id = "Weapon")] Katana,
    u32,
    #[inject(multi = "Plugin", unmanaged)] Vec<String>,
);

#[derive(Injectable)]
#[allow(dead_code)]
pub struct Conflicted {
    #[inject(named = "a", named = "b")]
    weapon: Katana,
}

#[derive(Injectable)]
#[allow(dead_code)]
pub struct ConflictedAcrossCalls {
    #[inject(named = "a")]
    #[inject(name = "x")]
    #[inject(named = "b")]
    weapon: Katana,
}

#[derive(Injectable)]
#[injectable(auto_register)]
#[allow(dead_code)]
pub struct AutoNinja {
    #[inject(named = "shuriken")]
    weapon: Katana,
}

#[test]
fn test_named_fields_become_property_metadata() {
    let store = InMemoryMetadataStore::new();
    Ninja::register_metadata(&store).unwrap();

    let ninja = Ninja::annotation_target();
    assert_eq!(
        store.property_metadata(&ninja, &PropertyKey::from("weapon")),
        vec![
            MetadataEntry::new(keys::NAMED_TAG, "katana"),
            MetadataEntry::new("can_throw", false),
        ]
    );
    assert_eq!(
        store.property_metadata(&ninja, &PropertyKey::from("retries")),
        vec![
            MetadataEntry::new(keys::OPTIONAL_TAG, true),
            MetadataEntry::new("retries", 3),
        ]
    );
    assert!(store.property_metadata(&ninja, &PropertyKey::from("level")).is_empty());
    assert!(store.read_bucket(&ninja, StorageBucket::Parameter).is_empty());
}

#[test]
fn test_tuple_fields_become_parameter_metadata() {
    let store = InMemoryMetadataStore::new();
    Samurai::register_metadata(&store).unwrap();

    let samurai = TypeInfo::of::<Samurai>();
    assert_eq!(
        store.parameter_metadata(&samurai, 0),
        vec![MetadataEntry::new(keys::INJECT_TAG, Identifier::from("Weapon"))]
    );
    assert!(store.parameter_metadata(&samurai, 1).is_empty());

    let third = store.parameter_metadata(&samurai, 2);
    assert_eq!(third.len(), 2);
    assert_eq!(
        third[0].value(),
        &MetadataValue::Identifier(Identifier::from("Plugin"))
    );
    assert_eq!(third[1], MetadataEntry::new(keys::UNMANAGED_TAG, true));
}

#[test]
fn test_registering_twice_is_rejected() {
    let store = InMemoryMetadataStore::new();
    Samurai::register_metadata(&store).unwrap();

    assert_eq!(
        Samurai::register_metadata(&store),
        Err(MetadataError::duplicated(keys::INJECT_TAG))
    );
}

#[test]
fn test_duplicate_key_within_one_attribute() {
    let store = InMemoryMetadataStore::new();

    assert_eq!(
        Conflicted::register_metadata(&store),
        Err(MetadataError::duplicated(keys::NAMED_TAG))
    );
    assert!(store.is_empty());
}

#[test]
fn test_duplicate_key_across_attributes_keeps_earlier_calls() {
    let store = InMemoryMetadataStore::new();

    assert_eq!(
        ConflictedAcrossCalls::register_metadata(&store),
        Err(MetadataError::duplicated(keys::NAMED_TAG))
    );
    assert_eq!(
        store.property_metadata(
            &TypeInfo::of::<ConflictedAcrossCalls>(),
            &PropertyKey::from("weapon")
        ),
        vec![
            MetadataEntry::new(keys::NAMED_TAG, "a"),
            MetadataEntry::new(keys::NAME_TAG, "x"),
        ]
    );
}

#[test]
fn test_auto_register_populates_global_store() {
    assert_eq!(
        global_metadata_store()
            .property_metadata(&TypeInfo::of::<AutoNinja>(), &PropertyKey::from("weapon")),
        vec![MetadataEntry::new(keys::NAMED_TAG, "shuriken")]
    );
}
