//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Npc Context: NPC 对话管理

pub mod npc;

// 共享的提示词拼装模块
mod prompt;

pub use prompt::{build_system_prompt, hinted_input, STOP_SEQUENCES};
