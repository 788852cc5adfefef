//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// LLM 服务配置
    #[serde(default)]
    pub llm: LlmConfig,

    /// NPC 名单配置
    #[serde(default)]
    pub npc: NpcConfig,

    /// GC 配置
    #[serde(default)]
    pub gc: GcConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            llm: LlmConfig::default(),
            npc: NpcConfig::default(),
            gc: GcConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8088
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// LLM 服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// OpenAI 兼容服务的基础 URL
    #[serde(default = "default_llm_url")]
    pub url: String,

    /// 模型名
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// Bearer key，本地部署可以不配
    #[serde(default)]
    pub api_key: Option<String>,

    /// 请求超时时间（秒）
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,

    /// 采样温度
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// 回复长度上限，0 或缺省表示不限制
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

fn default_llm_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_llm_model() -> String {
    "gpt-35-turbo".to_string()
}

fn default_llm_timeout() -> u64 {
    120
}

fn default_temperature() -> f32 {
    0.5
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            url: default_llm_url(),
            model: default_llm_model(),
            api_key: None,
            timeout_secs: default_llm_timeout(),
            temperature: default_temperature(),
            max_tokens: None,
        }
    }
}

/// NPC 名单配置
#[derive(Debug, Clone, Deserialize)]
pub struct NpcConfig {
    /// 固定 NPC 名单，每个新会话都预创建这些对话
    #[serde(default = "default_roster")]
    pub roster: Vec<String>,

    /// 新会话的默认当前 NPC，必须在名单内
    #[serde(default = "default_npc_name")]
    pub default_npc: String,

    /// 人设文件目录（`<Name>_en.txt`）
    #[serde(default = "default_personas_dir")]
    pub personas_dir: PathBuf,

    /// 历史渲染用的玩家名
    #[serde(default = "default_player_name")]
    pub player_name: String,
}

fn default_roster() -> Vec<String> {
    vec![
        "Ted".to_string(),
        "Barry".to_string(),
        "Mike".to_string(),
    ]
}

fn default_npc_name() -> String {
    "Ted".to_string()
}

fn default_personas_dir() -> PathBuf {
    PathBuf::from("personas")
}

fn default_player_name() -> String {
    "Player".to_string()
}

impl Default for NpcConfig {
    fn default() -> Self {
        Self {
            roster: default_roster(),
            default_npc: default_npc_name(),
            personas_dir: default_personas_dir(),
            player_name: default_player_name(),
        }
    }
}

/// GC（空闲会话回收）配置
#[derive(Debug, Clone, Deserialize)]
pub struct GcConfig {
    /// 是否启用自动 GC
    #[serde(default = "default_gc_enabled")]
    pub enabled: bool,

    /// GC 间隔时间（秒）
    #[serde(default = "default_gc_interval")]
    pub interval_secs: u64,

    /// Session 过期时间（秒）
    #[serde(default = "default_session_expire")]
    pub session_expire_secs: u64,
}

fn default_gc_enabled() -> bool {
    true
}

fn default_gc_interval() -> u64 {
    3600 // 1 小时
}

fn default_session_expire() -> u64 {
    86400 // 24 小时
}

impl Default for GcConfig {
    fn default() -> Self {
        Self {
            enabled: default_gc_enabled(),
            interval_secs: default_gc_interval(),
            session_expire_secs: default_session_expire(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
