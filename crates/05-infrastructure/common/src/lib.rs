//! # Infrastructure Common
//!
//! 元数据标记引擎的公共类型、错误定义与配置。
//!
//! ## 核心类型
//!
//! - [`TypeInfo`] - 标记目标（类型）的身份
//! - [`Identifier`] - 元数据键与属性键，字符串名称或唯一 [`Symbol`]
//! - [`MetadataEntry`] - 一条 `(key, value)` 元数据
//! - [`MetadataPayload`] - 单次注册调用携带的一条或多条元数据
//! - [`MetadataError`] - 注册失败的两类错误
//! - [`EngineSettings`] - 引擎配置（日志等）
//!
//! ## 设计原则
//!
//! - 元数据以类型身份为键，存放在类型之外的侧表中
//! - 所有校验在写入之前完成，失败时不留下部分状态

pub mod configuration;
pub mod error_msgs;
pub mod errors;
pub mod keys;
pub mod logging;
pub mod metadata;

pub use configuration::*;
pub use errors::*;
pub use logging::*;
pub use metadata::*;
