//! 元数据注册构建器
//!
//! 先收集一个类型的全部标记，再在一次不可分割的更新中统一校验并提交，
//! 结果不依赖各条标记被登记的先后时机。

use crate::duplicate;
use di_abstractions::{parameter_slot, BucketMap, MetadataStore, SlotKey};
use infrastructure_common::{MetadataPayload, MetadataResult, PropertyKey, TypeInfo};
use tracing::{info, warn};

/// 单个类型的元数据注册构建器
#[derive(Debug, Clone)]
pub struct TargetMetadataBuilder {
    target: TypeInfo,
    parameters: Vec<(SlotKey, MetadataPayload)>,
    properties: Vec<(SlotKey, MetadataPayload)>,
}

impl TargetMetadataBuilder {
    /// 为指定类型创建构建器
    pub fn new(target: TypeInfo) -> Self {
        Self {
            target,
            parameters: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn for_type<T: 'static>() -> Self {
        Self::new(TypeInfo::of::<T>())
    }

    /// 登记构造函数参数元数据
    pub fn parameter(mut self, index: usize, metadata: impl Into<MetadataPayload>) -> Self {
        self.parameters.push((parameter_slot(index), metadata.into()));
        self
    }

    /// 登记实例属性元数据
    pub fn property(
        mut self,
        key: impl Into<PropertyKey>,
        metadata: impl Into<MetadataPayload>,
    ) -> Self {
        self.properties.push((key.into(), metadata.into()));
        self
    }

    /// 已登记的注册次数
    pub fn len(&self) -> usize {
        self.parameters.len() + self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 校验并提交全部登记的元数据
    ///
    /// 两个存储桶在同一次不可分割的更新中校验并写入，任何一条失败都不会提交任何内容。
    pub fn register(self, store: &dyn MetadataStore) -> MetadataResult<()> {
        if self.is_empty() {
            return Ok(());
        }

        store
            .update_target(&self.target, &mut |parameters, properties| {
                stage(parameters, &self.parameters)?;
                stage(properties, &self.properties)
            })
            .map_err(|e| {
                warn!("类型 {} 的元数据注册被拒绝: {}", self.target, e);
                e
            })?;

        info!(
            "类型 {} 的元数据注册完成: {} 个参数标记, {} 个属性标记",
            self.target,
            self.parameters.len(),
            self.properties.len()
        );
        Ok(())
    }
}

/// 按登记顺序把元数据追加到映射中
fn stage(map: &mut BucketMap, registrations: &[(SlotKey, MetadataPayload)]) -> MetadataResult<()> {
    for (slot, payload) in registrations {
        let entries = duplicate::approve(payload.clone(), map.get(slot).map(Vec::as_slice))?;
        map.entry(slot.clone()).or_default().extend(entries);
    }
    Ok(())
}
