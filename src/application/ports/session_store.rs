//! Session Store Port - 会话状态管理
//!
//! 定义会话存取的抽象接口，具体实现在 infrastructure/memory 层。
//! 会话在首次访问时懒创建，任何字符串都可以作为 key。

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::npc::Turn;

/// Session Store 错误
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("NPC not found: {0}")]
    NpcNotFound(String),
}

/// 会话概要
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub user_id: String,
    pub npc_names: Vec<String>,
    pub current_npc: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

/// 当前 NPC 对话的快照
///
/// `turns` 为结构化历史（供提示词拼装），`history` 为渲染后的
/// 可读行（供 API 响应）。
#[derive(Debug, Clone)]
pub struct ConversationSnapshot {
    pub npc_name: String,
    pub persona: String,
    pub turns: Vec<Turn>,
    pub history: Vec<String>,
    pub task_status: String,
}

/// Session Store Port
///
/// 除 `switch_npc` 外所有操作都不会失败：会话不存在就地创建。
/// 每次访问都会刷新 last_activity。
pub trait SessionStorePort: Send + Sync {
    /// 返回会话概要，不存在则用固定 NPC 名单创建
    fn get_or_create(&self, user_id: &str) -> SessionSnapshot;

    /// 当前 NPC 对话的快照（人设懒加载后缓存）
    fn current_conversation(&self, user_id: &str) -> ConversationSnapshot;

    /// 切换当前 NPC，未知名称报错且不移动指针
    fn switch_npc(&self, user_id: &str, npc_name: &str)
        -> Result<ConversationSnapshot, SessionError>;

    /// 向当前 NPC 的历史追加玩家发言
    fn append_player_turn(&self, user_id: &str, text: &str);

    /// 向当前 NPC 的历史追加 NPC 发言
    fn append_npc_turn(&self, user_id: &str, text: &str);

    /// 重置当前 NPC 的对话（清空历史、恢复/覆盖人设、重置任务状态）
    fn reset_conversation(
        &self,
        user_id: &str,
        persona_override: Option<String>,
        task_status: Option<String>,
    );

    /// 当前 NPC 的人设文本（懒加载）
    fn persona(&self, user_id: &str) -> String;

    /// 当前 NPC 的任务状态（原样返回）
    fn task_status(&self, user_id: &str) -> String;

    /// 覆盖当前 NPC 的任务状态，不做枚举校验
    fn set_task_status(&self, user_id: &str, status: &str);

    /// 丢弃整个会话，下次访问重新创建默认结构
    fn reset(&self, user_id: &str);

    /// 空闲超过 idle_timeout_secs 的会话 ID
    fn expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String>;
}
