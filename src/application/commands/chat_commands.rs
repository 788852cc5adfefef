//! Chat Commands - 对话相关命令

/// 发送消息命令 - 玩家对当前 NPC 说一句话
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub user_id: String,
    pub message: String,
}

/// 发送消息响应
#[derive(Debug, Clone)]
pub struct SendMessageResponse {
    pub npc_name: String,
    pub message: String,
}

/// 重置对话命令 - 清空当前 NPC 的历史和任务状态
#[derive(Debug, Clone)]
pub struct ResetConversationCommand {
    pub user_id: String,
}

/// 重置对话响应
#[derive(Debug, Clone)]
pub struct ResetConversationResponse {
    pub npc_name: String,
}
