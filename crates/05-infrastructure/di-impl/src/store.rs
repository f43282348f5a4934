//! 内存元数据存储
//!
//! 以 [`TypeId`] 为键的侧表。每个目标类型持有参数和属性两个存储桶，
//! 首次写入时创建，之后只增不减。

use crate::duplicate;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use di_abstractions::{BucketMap, MetadataReader, MetadataStore, SlotKey, StorageBucket};
use infrastructure_common::{MetadataEntry, MetadataPayload, MetadataResult, TypeInfo};
use once_cell::sync::Lazy;
use std::any::TypeId;
use tracing::{debug, warn};

/// 单个目标类型的元数据
#[derive(Debug, Clone)]
struct TargetMetadata {
    type_info: TypeInfo,
    parameters: BucketMap,
    properties: BucketMap,
}

impl TargetMetadata {
    fn new(type_info: TypeInfo) -> Self {
        Self {
            type_info,
            parameters: BucketMap::new(),
            properties: BucketMap::new(),
        }
    }

    fn bucket(&self, bucket: StorageBucket) -> &BucketMap {
        match bucket {
            StorageBucket::Parameter => &self.parameters,
            StorageBucket::Property => &self.properties,
        }
    }

    fn bucket_mut(&mut self, bucket: StorageBucket) -> &mut BucketMap {
        match bucket {
            StorageBucket::Parameter => &mut self.parameters,
            StorageBucket::Property => &mut self.properties,
        }
    }
}

/// 内存元数据存储
///
/// 对同一目标类型的读-改-写在持有该条目的分片锁期间完成，
/// 后续读取总能看到最新提交的状态。
#[derive(Debug, Default)]
pub struct InMemoryMetadataStore {
    targets: DashMap<TypeId, TargetMetadata>,
}

impl InMemoryMetadataStore {
    /// 创建新的存储
    pub fn new() -> Self {
        Self {
            targets: DashMap::new(),
        }
    }

    /// 已记录的目标类型数量
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl MetadataReader for InMemoryMetadataStore {
    fn read_bucket(&self, target: &TypeInfo, bucket: StorageBucket) -> BucketMap {
        self.targets
            .get(&target.id)
            .map(|record| record.bucket(bucket).clone())
            .unwrap_or_default()
    }

    fn tagged_targets(&self) -> Vec<TypeInfo> {
        self.targets
            .iter()
            .map(|record| record.type_info.clone())
            .collect()
    }
}

impl MetadataStore for InMemoryMetadataStore {
    fn write_bucket(&self, target: &TypeInfo, bucket: StorageBucket, map: BucketMap) {
        let mut record = self
            .targets
            .entry(target.id)
            .or_insert_with(|| TargetMetadata::new(target.clone()));
        *record.bucket_mut(bucket) = map;
    }

    fn update_bucket(
        &self,
        target: &TypeInfo,
        bucket: StorageBucket,
        update: &mut dyn FnMut(&mut BucketMap) -> MetadataResult<()>,
    ) -> MetadataResult<()> {
        match self.targets.entry(target.id) {
            Entry::Occupied(mut occupied) => {
                let mut staged = occupied.get().bucket(bucket).clone();
                update(&mut staged)?;
                *occupied.get_mut().bucket_mut(bucket) = staged;
            }
            Entry::Vacant(vacant) => {
                let mut staged = BucketMap::new();
                update(&mut staged)?;
                let mut record = TargetMetadata::new(target.clone());
                *record.bucket_mut(bucket) = staged;
                vacant.insert(record);
            }
        }
        Ok(())
    }

    fn update_target(
        &self,
        target: &TypeInfo,
        update: &mut dyn FnMut(&mut BucketMap, &mut BucketMap) -> MetadataResult<()>,
    ) -> MetadataResult<()> {
        match self.targets.entry(target.id) {
            Entry::Occupied(mut occupied) => {
                let mut parameters = occupied.get().parameters.clone();
                let mut properties = occupied.get().properties.clone();
                update(&mut parameters, &mut properties)?;
                let record = occupied.get_mut();
                record.parameters = parameters;
                record.properties = properties;
            }
            Entry::Vacant(vacant) => {
                let mut record = TargetMetadata::new(target.clone());
                update(&mut record.parameters, &mut record.properties)?;
                vacant.insert(record);
            }
        }
        Ok(())
    }

    fn append_entries(
        &self,
        target: &TypeInfo,
        bucket: StorageBucket,
        slot: SlotKey,
        payload: MetadataPayload,
    ) -> MetadataResult<()> {
        let entries = duplicate::ensure_unique_keys(payload).map_err(|e| {
            warn!("元数据注册被拒绝: {} [{}] {}: {}", target, bucket, slot, e);
            e
        })?;

        self.update_bucket(target, bucket, &mut |map| {
            duplicate::ensure_no_conflicts(&entries, map.get(&slot).map(Vec::as_slice))?;
            map.entry(slot.clone())
                .or_default()
                .extend(entries.iter().cloned());
            Ok(())
        })
        .map_err(|e| {
            warn!("元数据注册被拒绝: {} [{}] {}: {}", target, bucket, slot, e);
            e
        })?;

        debug!(
            "追加元数据: {} [{}] {} <- {}",
            target,
            bucket,
            slot,
            describe_keys(&entries)
        );
        Ok(())
    }
}

fn describe_keys(entries: &[MetadataEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.key().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// 全局元数据存储
static GLOBAL_METADATA_STORE: Lazy<InMemoryMetadataStore> = Lazy::new(InMemoryMetadataStore::new);

/// 获取全局元数据存储
///
/// 进程启动时自动注册的类型写入这里。
pub fn global_metadata_store() -> &'static InMemoryMetadataStore {
    &GLOBAL_METADATA_STORE
}
