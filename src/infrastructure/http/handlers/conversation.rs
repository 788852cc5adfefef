//! Conversation Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::{
    GetConversationQuery, ResetConversationCommand, SendMessageCommand,
};
use crate::infrastructure::http::dto::{
    ConversationResponse, MessageResponse, SendMessageRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 当前 NPC 的累计对话历史
pub async fn get_conversation(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<ConversationResponse>, ApiError> {
    let result = state
        .get_conversation_handler
        .handle(GetConversationQuery { user_id })?;

    Ok(Json(ConversationResponse {
        npc_name: result.npc_name,
        conversation: result.conversation,
    }))
}

/// 玩家对当前 NPC 发消息，返回 NPC 的回复
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    // 空消息在任何状态改变之前被拒绝
    let message = req
        .message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| ApiError::bad_request("Message is required"))?;

    let result = state
        .send_message_handler
        .handle(SendMessageCommand { user_id, message })
        .await?;

    Ok(Json(MessageResponse {
        message: result.message,
    }))
}

/// 重置当前 NPC 的对话历史和任务状态
pub async fn reset_conversation(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .reset_conversation_handler
        .handle(ResetConversationCommand { user_id })?;

    Ok(Json(MessageResponse {
        message: "Conversations reset".to_string(),
    }))
}
