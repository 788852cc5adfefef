//! Npc Commands - NPC 相关命令

/// 切换当前 NPC 命令
#[derive(Debug, Clone)]
pub struct SwitchNpcCommand {
    pub user_id: String,
    pub npc_name: String,
}

/// 切换当前 NPC 响应
#[derive(Debug, Clone)]
pub struct SwitchNpcResponse {
    pub npc_name: String,
    pub config_str: String,
    pub conversation: Vec<String>,
}

/// 覆盖当前 NPC 人设命令
///
/// 人设写入走 reset：历史清空、任务状态回到初始值
#[derive(Debug, Clone)]
pub struct SetPersonaCommand {
    pub user_id: String,
    pub config_str: String,
}

/// 覆盖人设响应
#[derive(Debug, Clone)]
pub struct SetPersonaResponse {
    pub npc_name: String,
}

/// 覆盖任务状态命令 - 写入不做枚举校验
#[derive(Debug, Clone)]
pub struct SetTaskStatusCommand {
    pub user_id: String,
    pub task_status: String,
}

/// 覆盖任务状态响应
#[derive(Debug, Clone)]
pub struct SetTaskStatusResponse {
    pub npc_name: String,
    pub task_status: String,
}
