//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `NPCHAT_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `NPCHAT_SERVER__PORT=8080`
/// - `NPCHAT_LLM__URL=http://llm-server:11434`
/// - `NPCHAT_LLM__MODEL=gpt-4o-mini`
/// - `NPCHAT_NPC__PERSONAS_DIR=/data/personas`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8088)?
        .set_default("llm.url", "http://localhost:11434")?
        .set_default("llm.model", "gpt-35-turbo")?
        .set_default("llm.timeout_secs", 120)?
        .set_default("llm.temperature", 0.5)?
        .set_default("npc.roster", vec!["Ted", "Barry", "Mike"])?
        .set_default("npc.default_npc", "Ted")?
        .set_default("npc.personas_dir", "personas")?
        .set_default("npc.player_name", "Player")?
        .set_default("gc.enabled", true)?
        .set_default("gc.interval_secs", 3600)?
        .set_default("gc.session_expire_secs", 86400)?
        .set_default("log.level", "info")?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: NPCHAT_
    // 层级分隔符: __ (双下划线)
    // 例如: NPCHAT_LLM__URL=http://llm-server:11434
    builder = builder.add_source(
        Environment::with_prefix("NPCHAT")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证端口范围
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 验证 LLM URL
    if config.llm.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM URL cannot be empty".to_string(),
        ));
    }

    // 验证 NPC 名单
    if config.npc.roster.is_empty() {
        return Err(ConfigError::ValidationError(
            "NPC roster cannot be empty".to_string(),
        ));
    }
    if !config.npc.roster.contains(&config.npc.default_npc) {
        return Err(ConfigError::ValidationError(format!(
            "Default NPC '{}' is not in the roster",
            config.npc.default_npc
        )));
    }

    // 验证 GC 配置
    if config.gc.enabled && config.gc.interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "GC interval cannot be 0 when GC is enabled".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("LLM URL: {}", config.llm.url);
    tracing::info!("LLM Model: {}", config.llm.model);
    tracing::info!("LLM Timeout: {}s", config.llm.timeout_secs);
    tracing::info!("NPC Roster: {:?}", config.npc.roster);
    tracing::info!("Default NPC: {}", config.npc.default_npc);
    tracing::info!("Personas Directory: {:?}", config.npc.personas_dir);
    tracing::info!("GC Enabled: {}", config.gc.enabled);
    if config.gc.enabled {
        tracing::info!("GC Interval: {}s", config.gc.interval_secs);
        tracing::info!("Session Expire: {}s", config.gc.session_expire_secs);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_llm_url() {
        let mut config = AppConfig::default();
        config.llm.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_roster() {
        let mut config = AppConfig::default();
        config.npc.roster.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_default_npc_outside_roster() {
        let mut config = AppConfig::default();
        config.npc.default_npc = "Nobody".to_string();
        assert!(validate_config(&config).is_err());
    }
}
