//! 错误类型定义

use crate::error_msgs;
use crate::metadata::MetadataKey;
use thiserror::Error;

/// 元数据注册错误类型
///
/// 两类错误都属于编程错误，在类型定义（注册）阶段被发现，
/// 出现时本次注册不会写入任何状态。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// 上下文不匹配：参数标记同时携带了属性键，或属性标记直接作用于类本身
    #[error("{}", error_msgs::INVALID_DECORATOR_OPERATION)]
    InvalidDecoratorOperation,

    /// 元数据键冲突，`key` 为冲突的键
    #[error("{} {key}", error_msgs::DUPLICATED_METADATA)]
    DuplicatedMetadata { key: MetadataKey },
}

impl MetadataError {
    /// 创建键冲突错误
    pub fn duplicated(key: impl Into<MetadataKey>) -> Self {
        Self::DuplicatedMetadata { key: key.into() }
    }

    /// 冲突的元数据键（仅键冲突错误）
    pub fn duplicated_key(&self) -> Option<&MetadataKey> {
        match self {
            Self::DuplicatedMetadata { key } => Some(key),
            Self::InvalidDecoratorOperation => None,
        }
    }
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置解析失败: {source}")]
    ParseError {
        #[from]
        source: config::ConfigError,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },

    #[error("日志初始化失败: {message}")]
    LoggingInitFailed { message: String },
}

/// 结果类型别名
pub type MetadataResult<T> = Result<T, MetadataError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
