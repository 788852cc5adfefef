//! HTTP LLM Client - 调用外部大模型 HTTP 服务
//!
//! 实现 LlmClientPort trait，走 OpenAI 兼容的 chat completions 接口
//!
//! 外部 API:
//! POST {base_url}/v1/chat/completions
//! Request: {"model": "...", "messages": [...], "temperature": 0.5, "stop": [...]}
//! Response: {"choices": [{"message": {"content": "..."}}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{ChatRequest, LlmClientPort, LlmError};
use crate::domain::npc::TurnRole;
use crate::domain::STOP_SEQUENCES;

/// HTTP LLM 客户端配置
#[derive(Debug, Clone)]
pub struct HttpLlmClientConfig {
    /// LLM 服务基础 URL
    pub base_url: String,
    /// 模型名
    pub model: String,
    /// Bearer key，本地部署通常不需要
    pub api_key: Option<String>,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 采样温度
    pub temperature: f32,
    /// 回复长度上限
    pub max_tokens: Option<u32>,
}

impl Default for HttpLlmClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "gpt-35-turbo".to_string(),
            api_key: None,
            timeout_secs: 120,
            temperature: 0.5,
            max_tokens: None,
        }
    }
}

impl HttpLlmClientConfig {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Chat completions 请求体
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ApiMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stop: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    content: Option<String>,
}

/// 把系统提示词、历史和本轮输入映射为 chat 消息序列
fn build_messages(request: &ChatRequest) -> Vec<ApiMessage> {
    let mut messages = Vec::with_capacity(request.turns.len() + 2);

    messages.push(ApiMessage {
        role: "system",
        content: request.system_prompt.clone(),
    });

    for turn in &request.turns {
        messages.push(ApiMessage {
            role: match turn.role {
                TurnRole::Player => "user",
                TurnRole::Npc => "assistant",
            },
            content: turn.text.clone(),
        });
    }

    messages.push(ApiMessage {
        role: "user",
        content: request.input.clone(),
    });

    messages
}

/// HTTP LLM 客户端
pub struct HttpLlmClient {
    client: Client,
    config: HttpLlmClientConfig,
}

impl HttpLlmClient {
    /// 创建新的 HTTP LLM 客户端
    pub fn new(config: HttpLlmClientConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl LlmClientPort for HttpLlmClient {
    async fn chat(&self, request: ChatRequest) -> Result<String, LlmError> {
        let body = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: build_messages(&request),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            stop: STOP_SEQUENCES.iter().map(|s| s.to_string()).collect(),
        };

        tracing::debug!(
            url = %self.completions_url(),
            npc_name = %request.npc_name,
            history_len = request.turns.len(),
            input_len = request.input.len(),
            "Sending chat completion request"
        );

        let mut http_request = self.client.post(self.completions_url()).json(&body);
        if let Some(key) = &self.config.api_key {
            http_request = http_request.bearer_auth(key);
        }

        let response = http_request.send().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout
            } else if e.is_connect() {
                LlmError::Network(format!("Cannot connect to LLM service: {}", e))
            } else {
                LlmError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            // 400/422 是被上层吞掉的那类拒绝，其余照常报错
            if status == reqwest::StatusCode::BAD_REQUEST
                || status == reqwest::StatusCode::UNPROCESSABLE_ENTITY
            {
                return Err(LlmError::InvalidRequest(format!(
                    "HTTP {}: {}",
                    status, error_text
                )));
            }
            return Err(LlmError::Service(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let reply = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("empty choices".to_string()))?;

        let reply = reply.trim().to_string();

        tracing::info!(
            npc_name = %request.npc_name,
            reply_len = reply.len(),
            "Chat completion received"
        );

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::npc::Turn;

    #[test]
    fn test_config_default() {
        let config = HttpLlmClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.temperature, 0.5);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpLlmClientConfig::new("http://example.com:9000", "test-model")
            .with_timeout(60);
        assert_eq!(config.base_url, "http://example.com:9000");
        assert_eq!(config.model, "test-model");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_build_messages_roles() {
        let request = ChatRequest {
            system_prompt: "system".to_string(),
            npc_name: "Ted".to_string(),
            turns: vec![Turn::player("hi"), Turn::npc("hello")],
            input: "how are you".to_string(),
        };

        let messages = build_messages(&request);
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[2].role, "assistant");
        assert_eq!(messages[3].role, "user");
        assert_eq!(messages[3].content, "how are you");
    }
}
