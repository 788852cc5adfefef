//! Session Commands - 会话相关命令

/// 重置会话命令 - 丢弃用户的全部 NPC 对话
#[derive(Debug, Clone)]
pub struct ResetSessionCommand {
    pub user_id: String,
}

/// 重置会话响应
#[derive(Debug, Clone)]
pub struct ResetSessionResponse {
    pub user_id: String,
}
