//! Chat Queries - 对话相关查询

/// 查询当前 NPC 的对话历史
#[derive(Debug, Clone)]
pub struct GetConversationQuery {
    pub user_id: String,
}

/// 对话历史响应
#[derive(Debug, Clone)]
pub struct GetConversationResponse {
    pub npc_name: String,
    pub conversation: Vec<String>,
}

/// 查询当前 NPC 的人设文本
#[derive(Debug, Clone)]
pub struct GetPersonaQuery {
    pub user_id: String,
}

/// 人设文本响应
#[derive(Debug, Clone)]
pub struct GetPersonaResponse {
    pub npc_name: String,
    pub config_str: String,
}

/// 查询当前 NPC 的任务状态
#[derive(Debug, Clone)]
pub struct GetTaskStatusQuery {
    pub user_id: String,
}

/// 任务状态响应
#[derive(Debug, Clone)]
pub struct GetTaskStatusResponse {
    pub npc_name: String,
    pub task_status: String,
}
