//! Session Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::ResetSessionCommand;
use crate::infrastructure::http::dto::MessageResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 丢弃用户的整个会话，下次访问重新创建默认结构
pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .reset_session_handler
        .handle(ResetSessionCommand { user_id })?;

    Ok(Json(MessageResponse {
        message: "Session reset".to_string(),
    }))
}
