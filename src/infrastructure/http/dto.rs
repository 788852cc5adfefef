//! Data Transfer Objects
//!
//! 请求体字段全部 Option：字段缺失或为空时由 handler 返回描述性 400，
//! 对齐源系统的字段存在性检查。

use serde::{Deserialize, Serialize};

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeNpcRequest {
    pub npc_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetConfigStrRequest {
    pub config_str: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetTaskStatusRequest {
    pub task_status: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct UserIdResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub npc_name: String,
    pub conversation: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChangeNpcResponse {
    pub npc_name: String,
    pub config_str: String,
    pub conversation: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ConfigStrResponse {
    pub config_str: String,
}

#[derive(Debug, Serialize)]
pub struct TaskStatusResponse {
    pub task_status: String,
}
