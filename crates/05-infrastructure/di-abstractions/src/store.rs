//! 元数据存储抽象接口

use infrastructure_common::{
    keys, Identifier, MetadataEntry, MetadataPayload, MetadataResult, PropertyKey, TypeInfo,
};
use std::collections::HashMap;
use std::fmt;

/// 存储桶
///
/// 参数与属性使用相互独立的命名空间，参数索引 `"0"` 与名为 `"0"` 的属性互不影响。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageBucket {
    /// 构造函数参数
    Parameter,
    /// 实例属性
    Property,
}

impl StorageBucket {
    /// 存储桶对应的命名空间
    pub fn namespace(&self) -> &'static str {
        match self {
            Self::Parameter => keys::TAGGED,
            Self::Property => keys::TAGGED_PROP,
        }
    }
}

impl fmt::Display for StorageBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.namespace())
    }
}

/// 存储桶内的注入点键：参数索引的字符串形式，或属性名称/符号
pub type SlotKey = Identifier;

/// 注入点到元数据列表的映射
pub type BucketMap = HashMap<SlotKey, Vec<MetadataEntry>>;

/// 参数索引对应的注入点键
pub fn parameter_slot(index: usize) -> SlotKey {
    Identifier::Name(index.to_string())
}

/// 元数据读取接口
///
/// 解析引擎通过此接口读取元数据。同一注入点内不会出现重复的键，
/// 列表顺序即注册顺序。
pub trait MetadataReader: Send + Sync {
    /// 读取目标类型某个存储桶的全部元数据，不存在时返回空映射
    fn read_bucket(&self, target: &TypeInfo, bucket: StorageBucket) -> BucketMap;

    /// 已写入过元数据的全部目标类型
    fn tagged_targets(&self) -> Vec<TypeInfo>;

    /// 读取构造函数参数的元数据
    fn parameter_metadata(&self, target: &TypeInfo, index: usize) -> Vec<MetadataEntry> {
        self.read_bucket(target, StorageBucket::Parameter)
            .remove(&parameter_slot(index))
            .unwrap_or_default()
    }

    /// 读取实例属性的元数据
    fn property_metadata(&self, target: &TypeInfo, key: &PropertyKey) -> Vec<MetadataEntry> {
        self.read_bucket(target, StorageBucket::Property)
            .remove(key)
            .unwrap_or_default()
    }
}

/// 元数据存储接口
///
/// 以类型身份为键的侧表，不需要被标记的类型做任何配合。
pub trait MetadataStore: MetadataReader {
    /// 整体覆盖目标类型某个存储桶的内容
    fn write_bucket(&self, target: &TypeInfo, bucket: StorageBucket, map: BucketMap);

    /// 以不可分割的一步读取、修改并写回存储桶
    ///
    /// `update` 返回错误时存储保持不变。
    ///
    /// `update` 执行期间实现可能持有目标类型的写锁，
    /// 闭包内不得再访问同一个存储，否则可能死锁。
    fn update_bucket(
        &self,
        target: &TypeInfo,
        bucket: StorageBucket,
        update: &mut dyn FnMut(&mut BucketMap) -> MetadataResult<()>,
    ) -> MetadataResult<()>;

    /// 以不可分割的一步同时修改目标类型的参数与属性存储桶
    ///
    /// `update` 依次收到参数桶与属性桶，返回错误时两个存储桶都保持不变。
    /// 与 [`update_bucket`](Self::update_bucket) 相同，闭包内不得再访问同一个存储。
    fn update_target(
        &self,
        target: &TypeInfo,
        update: &mut dyn FnMut(&mut BucketMap, &mut BucketMap) -> MetadataResult<()>,
    ) -> MetadataResult<()>;

    /// 向注入点追加元数据
    ///
    /// 载荷内部或与已存条目存在相同的键时失败，且不写入任何内容。
    fn append_entries(
        &self,
        target: &TypeInfo,
        bucket: StorageBucket,
        slot: SlotKey,
        payload: MetadataPayload,
    ) -> MetadataResult<()>;
}
