//! Npc Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// 发言角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnRole {
    Player,
    Npc,
}

/// 对话中的一轮发言
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    pub fn player(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Player,
            text: text.into(),
        }
    }

    pub fn npc(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Npc,
            text: text.into(),
        }
    }

    /// 渲染为可读的一行，如 "Player: 你好" / "Ted: (grin) ..."
    pub fn render(&self, npc_name: &str, player_name: &str) -> String {
        match self.role {
            TurnRole::Player => format!("{}: {}", player_name, self.text),
            TurnRole::Npc => format!("{}: {}", npc_name, self.text),
        }
    }
}

/// NPC 对话聚合根
///
/// 不变量:
/// - 历史只能追加，直到 reset 才被清空
/// - 人设文本懒加载：None 表示尚未从文件读入
/// - 任务状态原样保存，不做枚举校验
#[derive(Debug, Clone)]
pub struct NpcConversation {
    npc_name: String,
    persona: Option<String>,
    turns: Vec<Turn>,
    task_status: String,
}

impl NpcConversation {
    /// 创建新对话，人设留待首次使用时加载
    pub fn new(npc_name: impl Into<String>) -> Self {
        Self {
            npc_name: npc_name.into(),
            persona: None,
            turns: Vec::new(),
            task_status: TaskStatus::INITIAL.as_str().to_string(),
        }
    }

    pub fn npc_name(&self) -> &str {
        &self.npc_name
    }

    /// 已加载（或被覆盖）的人设文本
    pub fn persona(&self) -> Option<&str> {
        self.persona.as_deref()
    }

    /// 缓存懒加载结果，或由调用方直接覆盖人设
    pub fn set_persona(&mut self, text: impl Into<String>) {
        self.persona = Some(text.into());
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn task_status(&self) -> &str {
        &self.task_status
    }

    /// 覆盖任务状态，任何字符串都接受
    pub fn set_task_status(&mut self, status: impl Into<String>) {
        self.task_status = status.into();
    }

    pub fn push_player_turn(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::player(text));
    }

    pub fn push_npc_turn(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::npc(text));
    }

    /// 渲染完整历史
    pub fn rendered_history(&self, player_name: &str) -> Vec<String> {
        self.turns
            .iter()
            .map(|t| t.render(&self.npc_name, player_name))
            .collect()
    }

    /// 重置对话
    ///
    /// - 清空历史
    /// - 人设：提供非空文本则覆盖，否则回到未加载状态（下次访问重新读文件）
    /// - 任务状态：提供则覆盖，否则回到初始值
    pub fn reset(&mut self, persona_override: Option<String>, task_status: Option<String>) {
        self.turns.clear();
        self.persona = persona_override.filter(|s| !s.is_empty());
        self.task_status =
            task_status.unwrap_or_else(|| TaskStatus::INITIAL.as_str().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_conversation_defaults() {
        let conv = NpcConversation::new("Ted");
        assert_eq!(conv.npc_name(), "Ted");
        assert!(conv.persona().is_none());
        assert!(conv.turns().is_empty());
        assert_eq!(conv.task_status(), "start");
    }

    #[test]
    fn test_turns_render_with_speaker_prefix() {
        let mut conv = NpcConversation::new("Ted");
        conv.push_player_turn("hi");
        conv.push_npc_turn("(eyebrow raised) Hello there.");

        let history = conv.rendered_history("Player");
        assert_eq!(history[0], "Player: hi");
        assert_eq!(history[1], "Ted: (eyebrow raised) Hello there.");
    }

    #[test]
    fn test_reset_clears_history_and_status() {
        let mut conv = NpcConversation::new("Barry");
        conv.push_player_turn("hello");
        conv.set_task_status("accepted");

        conv.reset(None, None);
        assert!(conv.turns().is_empty());
        assert_eq!(conv.task_status(), "start");
        assert!(conv.persona().is_none());
    }

    #[test]
    fn test_reset_with_persona_override() {
        let mut conv = NpcConversation::new("Barry");
        conv.set_persona("old persona");

        conv.reset(Some("new persona".to_string()), Some("accepted".to_string()));
        assert_eq!(conv.persona(), Some("new persona"));
        assert_eq!(conv.task_status(), "accepted");
    }

    #[test]
    fn test_reset_with_empty_persona_falls_back_to_lazy_load() {
        let mut conv = NpcConversation::new("Mike");
        conv.set_persona("something");

        conv.reset(Some(String::new()), None);
        assert!(conv.persona().is_none());
    }

    #[test]
    fn test_unknown_task_status_is_kept_verbatim() {
        let mut conv = NpcConversation::new("Ted");
        conv.set_task_status("lowoption");
        assert_eq!(conv.task_status(), "lowoption");
    }
}
