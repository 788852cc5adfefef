//! npchat - 脚本化 NPC 对话服务
//!
//! 架构设计: 分层 + 端口适配器
//!
//! 领域层 (domain/):
//! - Npc Context: NPC 对话聚合、任务状态枚举
//! - Prompt: 固定指令块 + 人设 + 状态提示的拼装
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SessionStore, LlmClient, PersonaSource）
//! - Commands: 命令处理器
//! - Queries: 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: SessionStore 内存实现
//! - Adapters: LLM Client, Persona Source
//! - Worker: 空闲会话 GC

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
