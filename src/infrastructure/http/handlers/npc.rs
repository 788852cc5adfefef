//! Npc Handlers
//!
//! 当前 NPC 的切换、人设与任务状态读写

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::{
    GetPersonaQuery, GetTaskStatusQuery, SetPersonaCommand, SetTaskStatusCommand,
    SwitchNpcCommand,
};
use crate::infrastructure::http::dto::{
    ChangeNpcRequest, ChangeNpcResponse, ConfigStrResponse, MessageResponse,
    SetConfigStrRequest, SetTaskStatusRequest, TaskStatusResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// Change NPC
// ============================================================================

/// 切换当前 NPC，返回其人设和历史
pub async fn change_npc(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(req): Json<ChangeNpcRequest>,
) -> Result<Json<ChangeNpcResponse>, ApiError> {
    let npc_name = req
        .npc_name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::bad_request("NPC name is required"))?;

    let result = state
        .switch_npc_handler
        .handle(SwitchNpcCommand { user_id, npc_name })?;

    Ok(Json(ChangeNpcResponse {
        npc_name: result.npc_name,
        config_str: result.config_str,
        conversation: result.conversation,
    }))
}

// ============================================================================
// Config Str
// ============================================================================

/// 当前 NPC 的人设文本
pub async fn get_config_str(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<ConfigStrResponse>, ApiError> {
    let result = state.get_persona_handler.handle(GetPersonaQuery { user_id })?;

    Ok(Json(ConfigStrResponse {
        config_str: result.config_str,
    }))
}

/// 覆盖当前 NPC 的人设文本（对话随之重置）
pub async fn set_config_str(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(req): Json<SetConfigStrRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let config_str = req
        .config_str
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::bad_request("config_str is required"))?;

    state
        .set_persona_handler
        .handle(SetPersonaCommand { user_id, config_str })?;

    Ok(Json(MessageResponse {
        message: "config_str set".to_string(),
    }))
}

// ============================================================================
// Task Status
// ============================================================================

/// 当前 NPC 的任务状态
pub async fn get_task_status(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<TaskStatusResponse>, ApiError> {
    let result = state
        .get_task_status_handler
        .handle(GetTaskStatusQuery { user_id })?;

    Ok(Json(TaskStatusResponse {
        task_status: result.task_status,
    }))
}

/// 覆盖当前 NPC 的任务状态（不做枚举校验）
pub async fn set_task_status(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(req): Json<SetTaskStatusRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let task_status = req
        .task_status
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::bad_request("task_status is required"))?;

    state
        .set_task_status_handler
        .handle(SetTaskStatusCommand { user_id, task_status })?;

    Ok(Json(MessageResponse {
        message: "task_status set".to_string(),
    }))
}
