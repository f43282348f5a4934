//! 元数据定义
//!
//! 提供标记目标、标识符以及元数据条目等基础类型

use std::any::TypeId;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 类型信息
///
/// 作为标记目标的身份：存储以 `id` 为键，名称只用于日志和展示。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型名称
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 模块路径
    pub module_path: String,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: 'static>() -> Self {
        let full_name = std::any::type_name::<T>();
        Self {
            name: strip_module_paths(full_name),
            id: TypeId::of::<T>(),
            module_path: full_name.to_string(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径与泛型参数）
    pub fn short_name(&self) -> &str {
        self.name.split('<').next().unwrap_or(&self.name)
    }
}

/// 去掉类型名称中每一段路径的模块前缀，泛型参数一并处理
///
/// `demo::Holder<alloc::string::String>` -> `Holder<String>`
fn strip_module_paths(full_name: &str) -> String {
    let mut result = String::with_capacity(full_name.len());
    let mut path = String::new();

    for ch in full_name.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            path.push(ch);
        } else {
            result.push_str(path.rsplit("::").next().unwrap_or(&path));
            path.clear();
            result.push(ch);
        }
    }
    result.push_str(path.rsplit("::").next().unwrap_or(&path));

    result
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.module_path)
    }
}

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// 唯一符号
///
/// 每次调用 [`Symbol::new`] 都得到一个新的符号，描述相同的两个符号也互不相等。
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Arc<str>,
}

impl Symbol {
    /// 创建新的符号
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: Arc::from(description.into()),
        }
    }

    /// 符号描述
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description)
    }
}

/// 标识符：字符串名称或唯一符号
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Name(String),
    Symbol(Symbol),
}

impl Identifier {
    /// 名称形式时返回名称
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Symbol(_) => None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Symbol(symbol) => symbol.fmt(f),
        }
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Symbol> for Identifier {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

/// 元数据键
pub type MetadataKey = Identifier;

/// 属性键
pub type PropertyKey = Identifier;

/// 元数据值
///
/// 对引擎而言是不透明的载荷，只由解析引擎解释。
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    /// 任意 JSON 值
    Json(serde_json::Value),
    /// 服务标识符
    Identifier(Identifier),
    /// 类型引用
    Type(TypeInfo),
}

impl MetadataValue {
    /// 字符串形式的 JSON 值
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Json(value) => value.as_str(),
            Self::Identifier(Identifier::Name(name)) => Some(name),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for MetadataValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::Json(serde_json::Value::String(value.to_string()))
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::Json(serde_json::Value::String(value))
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Json(serde_json::Value::Bool(value))
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Json(serde_json::Value::from(value))
    }
}

impl From<i32> for MetadataValue {
    fn from(value: i32) -> Self {
        Self::Json(serde_json::Value::from(value))
    }
}

impl From<Identifier> for MetadataValue {
    fn from(value: Identifier) -> Self {
        Self::Identifier(value)
    }
}

impl From<Symbol> for MetadataValue {
    fn from(value: Symbol) -> Self {
        Self::Identifier(Identifier::Symbol(value))
    }
}

impl From<TypeInfo> for MetadataValue {
    fn from(value: TypeInfo) -> Self {
        Self::Type(value)
    }
}

/// 元数据条目
///
/// 创建后不可修改；`key` 用于区分语义，`value` 为载荷。
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataEntry {
    key: MetadataKey,
    value: MetadataValue,
}

impl MetadataEntry {
    /// 创建新的元数据条目
    pub fn new(key: impl Into<MetadataKey>, value: impl Into<MetadataValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &MetadataKey {
        &self.key
    }

    pub fn value(&self) -> &MetadataValue {
        &self.value
    }
}

/// 单次注册调用携带的元数据
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataPayload {
    /// 单条元数据
    Single(MetadataEntry),
    /// 有序的多条元数据
    Many(Vec<MetadataEntry>),
}

impl MetadataPayload {
    /// 规范化为有序序列
    pub fn into_entries(self) -> Vec<MetadataEntry> {
        match self {
            Self::Single(entry) => vec![entry],
            Self::Many(entries) => entries,
        }
    }

    /// 按顺序借用全部条目
    pub fn entries(&self) -> &[MetadataEntry] {
        match self {
            Self::Single(entry) => std::slice::from_ref(entry),
            Self::Many(entries) => entries,
        }
    }
}

impl From<MetadataEntry> for MetadataPayload {
    fn from(entry: MetadataEntry) -> Self {
        Self::Single(entry)
    }
}

impl From<Vec<MetadataEntry>> for MetadataPayload {
    fn from(entries: Vec<MetadataEntry>) -> Self {
        Self::Many(entries)
    }
}

impl<const N: usize> From<[MetadataEntry; N]> for MetadataPayload {
    fn from(entries: [MetadataEntry; N]) -> Self {
        Self::Many(entries.into())
    }
}
