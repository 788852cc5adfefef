//! Chat Command Handlers

use std::sync::Arc;

use crate::application::commands::chat_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{ChatRequest, LlmClientPort, LlmError, SessionStorePort};
use crate::domain::{build_system_prompt, hinted_input};

/// LLM 拒绝请求时返回给玩家的固定回复
const FALLBACK_REPLY: &str = "出错了！";

/// SendMessage Handler - 玩家消息进入当前 NPC 的对话
///
/// 流程：快照 → 追加玩家发言 → 拼提示词 → 调 LLM → 追加 NPC 发言。
/// 快照与写回之间没有原子性保证，同一用户的并发请求可能交错。
pub struct SendMessageHandler {
    session_store: Arc<dyn SessionStorePort>,
    llm_client: Arc<dyn LlmClientPort>,
}

impl SendMessageHandler {
    pub fn new(
        session_store: Arc<dyn SessionStorePort>,
        llm_client: Arc<dyn LlmClientPort>,
    ) -> Self {
        Self {
            session_store,
            llm_client,
        }
    }

    pub async fn handle(
        &self,
        cmd: SendMessageCommand,
    ) -> Result<SendMessageResponse, ApplicationError> {
        let snapshot = self.session_store.current_conversation(&cmd.user_id);

        self.session_store
            .append_player_turn(&cmd.user_id, &cmd.message);

        // 任务状态提示只进出站提示词，不进历史
        let request = ChatRequest {
            system_prompt: build_system_prompt(&snapshot.persona),
            npc_name: snapshot.npc_name.clone(),
            turns: snapshot.turns,
            input: hinted_input(&cmd.message, &snapshot.task_status),
        };

        match self.llm_client.chat(request).await {
            Ok(reply) => {
                self.session_store.append_npc_turn(&cmd.user_id, &reply);

                tracing::info!(
                    user_id = %cmd.user_id,
                    npc_name = %snapshot.npc_name,
                    reply_len = reply.len(),
                    "NPC reply generated"
                );

                Ok(SendMessageResponse {
                    npc_name: snapshot.npc_name,
                    message: reply,
                })
            }
            // 无效请求被吞掉：记日志、返回固定回复，不追加 NPC 发言
            Err(LlmError::InvalidRequest(msg)) => {
                tracing::warn!(
                    user_id = %cmd.user_id,
                    npc_name = %snapshot.npc_name,
                    error = %msg,
                    "LLM rejected request, returning fallback reply"
                );

                Ok(SendMessageResponse {
                    npc_name: snapshot.npc_name,
                    message: FALLBACK_REPLY.to_string(),
                })
            }
            Err(e) => Err(ApplicationError::external_service(e.to_string())),
        }
    }
}

/// ResetConversation Handler - 重置当前 NPC 的对话
pub struct ResetConversationHandler {
    session_store: Arc<dyn SessionStorePort>,
}

impl ResetConversationHandler {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    pub fn handle(
        &self,
        cmd: ResetConversationCommand,
    ) -> Result<ResetConversationResponse, ApplicationError> {
        let snapshot = self.session_store.get_or_create(&cmd.user_id);

        self.session_store
            .reset_conversation(&cmd.user_id, None, None);

        tracing::info!(
            user_id = %cmd.user_id,
            npc_name = %snapshot.current_npc,
            "Conversation reset"
        );

        Ok(ResetConversationResponse {
            npc_name: snapshot.current_npc,
        })
    }
}
