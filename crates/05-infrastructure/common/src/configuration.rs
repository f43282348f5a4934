//! 引擎配置
//!
//! 按顺序叠加可选的 `config/tagging` 文件与 `TAGGING__*` 环境变量，
//! 例如 `TAGGING__LOGGING__LEVEL=debug`。

use crate::errors::{ConfigError, ConfigResult};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, error};

/// 默认配置文件（不含扩展名）
pub const DEFAULT_CONFIG_FILE: &str = "config/tagging";

/// 环境变量前缀
pub const ENV_PREFIX: &str = "TAGGING";

/// 引擎配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// 日志配置
    pub logging: LoggingConfig,
}

impl EngineSettings {
    /// 从默认文件与环境变量加载配置
    pub fn load() -> ConfigResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));
        Self::build(builder)
    }

    /// 从指定文件加载配置，文件格式由扩展名决定
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let builder = config::Config::builder().add_source(config::File::from(path));
        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> ConfigResult<Self> {
        let settings = builder.build().map_err(|e| {
            error!("配置构建失败: {}", e);
            ConfigError::from(e)
        })?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;

        debug!("引擎配置加载完成: {:?}", settings);
        Ok(settings)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.logging.max_level().map(|_| ())
    }
}
