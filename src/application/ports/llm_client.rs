//! LLM Client Port - 大模型推理抽象
//!
//! 定义生成 NPC 下一句台词的抽象接口，具体实现在
//! infrastructure/adapters 层。

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::npc::Turn;

/// LLM 错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// 服务端以无效请求拒绝（被上层吞掉并替换为固定回复的那一类）
    #[error("Request rejected by LLM service: {0}")]
    InvalidRequest(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 聊天补全请求
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// 系统提示词（固定指令块 + 人设）
    pub system_prompt: String,
    /// NPC 名字（用于日志和追踪）
    pub npc_name: String,
    /// 此前的对话历史
    pub turns: Vec<Turn>,
    /// 已附加任务状态提示的玩家输入
    pub input: String,
}

/// LLM Client Port
///
/// 外部大模型服务的抽象接口，同步阻塞调用，无重试
#[async_trait]
pub trait LlmClientPort: Send + Sync {
    /// 根据系统提示词、历史和本轮输入生成 NPC 的下一句台词
    async fn chat(&self, request: ChatRequest) -> Result<String, LlmError>;
}
