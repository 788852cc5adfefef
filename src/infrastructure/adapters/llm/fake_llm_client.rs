//! Fake LLM Client - 用于测试的 LLM 客户端
//!
//! 始终返回固定台词，不实际调用大模型服务

use async_trait::async_trait;

use crate::application::ports::{ChatRequest, LlmClientPort, LlmError};

/// Fake LLM Client 配置
#[derive(Debug, Clone)]
pub struct FakeLlmClientConfig {
    /// 固定返回的台词
    pub reply: String,
    /// 模拟推理延迟（毫秒）
    pub delay_ms: u64,
    /// 为 true 时每次调用都以无效请求失败
    pub fail_invalid_request: bool,
}

impl Default for FakeLlmClientConfig {
    fn default() -> Self {
        Self {
            reply: "(scratches head) I'm not sure what to say about that.".to_string(),
            delay_ms: 0,
            fail_invalid_request: false,
        }
    }
}

/// Fake LLM Client
pub struct FakeLlmClient {
    config: FakeLlmClientConfig,
}

impl FakeLlmClient {
    pub fn new(config: FakeLlmClientConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(FakeLlmClientConfig::default())
    }
}

#[async_trait]
impl LlmClientPort for FakeLlmClient {
    async fn chat(&self, request: ChatRequest) -> Result<String, LlmError> {
        tracing::debug!(
            npc_name = %request.npc_name,
            history_len = request.turns.len(),
            "FakeLlmClient: returning fixed reply"
        );

        if self.config.delay_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.delay_ms)).await;
        }

        if self.config.fail_invalid_request {
            return Err(LlmError::InvalidRequest(
                "fake invalid request".to_string(),
            ));
        }

        Ok(self.config.reply.clone())
    }
}
