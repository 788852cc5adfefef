//! In-Memory Session Store Implementation

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{
    ConversationSnapshot, PersonaSourcePort, SessionError, SessionSnapshot, SessionStorePort,
};
use crate::domain::npc::NpcConversation;

/// Session Store 配置
#[derive(Debug, Clone)]
pub struct SessionStoreConfig {
    /// 固定 NPC 名单，新会话按此预创建对话
    pub roster: Vec<String>,
    /// 新会话的默认当前 NPC
    pub default_npc: String,
    /// 历史渲染用的玩家名
    pub player_name: String,
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            roster: vec![
                "Ted".to_string(),
                "Barry".to_string(),
                "Mike".to_string(),
            ],
            default_npc: "Ted".to_string(),
            player_name: "Player".to_string(),
        }
    }
}

/// 会话状态
struct SessionState {
    npcs: HashMap<String, NpcConversation>,
    current_npc: String,
    created_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
}

/// 内存会话存储
///
/// DashMap 提供按 key 的互斥；锁不会跨 await 持有，
/// 快照→LLM→写回的序列在会话层面不是原子的。
pub struct InMemorySessionStore {
    sessions: DashMap<String, SessionState>,
    config: SessionStoreConfig,
    persona_source: Arc<dyn PersonaSourcePort>,
}

impl InMemorySessionStore {
    pub fn new(config: SessionStoreConfig, persona_source: Arc<dyn PersonaSourcePort>) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
            persona_source,
        }
    }

    fn new_session(&self) -> SessionState {
        let now = Utc::now();
        let npcs = self
            .config
            .roster
            .iter()
            .map(|name| (name.clone(), NpcConversation::new(name.clone())))
            .collect();

        SessionState {
            npcs,
            current_npc: self.config.default_npc.clone(),
            created_at: now,
            last_activity: now,
        }
    }

    /// 取出（必要时创建）会话并刷新活动时间
    fn with_session<R>(&self, user_id: &str, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut entry = self
            .sessions
            .entry(user_id.to_string())
            .or_insert_with(|| {
                tracing::info!(user_id = %user_id, "Session created");
                self.new_session()
            });
        entry.last_activity = Utc::now();
        f(&mut entry)
    }

    /// 人设懒加载：首次访问时从来源读入并缓存
    fn ensure_persona(&self, conv: &mut NpcConversation) {
        if conv.persona().is_none() {
            let text = self.persona_source.load(conv.npc_name());
            conv.set_persona(text);
        }
    }

    fn snapshot(&self, conv: &NpcConversation) -> ConversationSnapshot {
        ConversationSnapshot {
            npc_name: conv.npc_name().to_string(),
            persona: conv.persona().unwrap_or_default().to_string(),
            turns: conv.turns().to_vec(),
            history: conv.rendered_history(&self.config.player_name),
            task_status: conv.task_status().to_string(),
        }
    }
}

impl SessionStorePort for InMemorySessionStore {
    fn get_or_create(&self, user_id: &str) -> SessionSnapshot {
        self.with_session(user_id, |state| {
            let mut npc_names: Vec<String> = state.npcs.keys().cloned().collect();
            npc_names.sort();

            SessionSnapshot {
                user_id: user_id.to_string(),
                npc_names,
                current_npc: state.current_npc.clone(),
                created_at: state.created_at,
                last_activity: state.last_activity,
            }
        })
    }

    fn current_conversation(&self, user_id: &str) -> ConversationSnapshot {
        self.with_session(user_id, |state| {
            let current = state.current_npc.clone();
            let conv = state
                .npcs
                .entry(current.clone())
                .or_insert_with(|| NpcConversation::new(current));
            self.ensure_persona(conv);
            self.snapshot(conv)
        })
    }

    fn switch_npc(
        &self,
        user_id: &str,
        npc_name: &str,
    ) -> Result<ConversationSnapshot, SessionError> {
        self.with_session(user_id, |state| {
            // 指针只在名单命中后移动
            match state.npcs.get_mut(npc_name) {
                None => Err(SessionError::NpcNotFound(npc_name.to_string())),
                Some(conv) => {
                    state.current_npc = npc_name.to_string();
                    self.ensure_persona(conv);
                    Ok(self.snapshot(conv))
                }
            }
        })
    }

    fn append_player_turn(&self, user_id: &str, text: &str) {
        self.with_session(user_id, |state| {
            let current = state.current_npc.clone();
            if let Some(conv) = state.npcs.get_mut(&current) {
                conv.push_player_turn(text);
            }
        })
    }

    fn append_npc_turn(&self, user_id: &str, text: &str) {
        self.with_session(user_id, |state| {
            let current = state.current_npc.clone();
            if let Some(conv) = state.npcs.get_mut(&current) {
                conv.push_npc_turn(text);
            }
        })
    }

    fn reset_conversation(
        &self,
        user_id: &str,
        persona_override: Option<String>,
        task_status: Option<String>,
    ) {
        self.with_session(user_id, |state| {
            let current = state.current_npc.clone();
            if let Some(conv) = state.npcs.get_mut(&current) {
                conv.reset(persona_override, task_status);
                tracing::debug!(
                    user_id = %user_id,
                    npc_name = %current,
                    "Conversation state reset"
                );
            }
        })
    }

    fn persona(&self, user_id: &str) -> String {
        self.with_session(user_id, |state| {
            let current = state.current_npc.clone();
            let conv = state
                .npcs
                .entry(current.clone())
                .or_insert_with(|| NpcConversation::new(current));
            self.ensure_persona(conv);
            conv.persona().unwrap_or_default().to_string()
        })
    }

    fn task_status(&self, user_id: &str) -> String {
        self.with_session(user_id, |state| {
            let current = state.current_npc.clone();
            state
                .npcs
                .get(&current)
                .map(|conv| conv.task_status().to_string())
                .unwrap_or_default()
        })
    }

    fn set_task_status(&self, user_id: &str, status: &str) {
        self.with_session(user_id, |state| {
            let current = state.current_npc.clone();
            if let Some(conv) = state.npcs.get_mut(&current) {
                conv.set_task_status(status);
            }
        })
    }

    fn reset(&self, user_id: &str) {
        if self.sessions.remove(user_id).is_some() {
            tracing::info!(user_id = %user_id, "Session discarded");
        }
    }

    fn expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String> {
        let now = Utc::now();
        let timeout = chrono::Duration::seconds(idle_timeout_secs as i64);

        self.sessions
            .iter()
            .filter_map(|entry| {
                let elapsed = now - entry.last_activity;
                if elapsed > timeout {
                    Some(entry.key().clone())
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试用人设来源：名字到固定文本
    struct MapPersonaSource;

    impl PersonaSourcePort for MapPersonaSource {
        fn load(&self, npc_name: &str) -> String {
            format!("{} persona", npc_name)
        }
    }

    fn store() -> InMemorySessionStore {
        InMemorySessionStore::new(SessionStoreConfig::default(), Arc::new(MapPersonaSource))
    }

    #[test]
    fn test_fresh_user_gets_default_roster() {
        let store = store();
        let snapshot = store.get_or_create("u1");

        assert_eq!(snapshot.npc_names, vec!["Barry", "Mike", "Ted"]);
        assert_eq!(snapshot.current_npc, "Ted");

        let conv = store.current_conversation("u1");
        assert_eq!(conv.npc_name, "Ted");
        assert!(conv.history.is_empty());
        assert_eq!(conv.task_status, "start");
    }

    #[test]
    fn test_persona_is_lazily_loaded_and_cached() {
        let store = store();
        assert_eq!(store.persona("u1"), "Ted persona");

        // 覆盖后不再回源
        store.reset_conversation("u1", Some("override".to_string()), None);
        assert_eq!(store.persona("u1"), "override");
    }

    #[test]
    fn test_switch_preserves_history() {
        let store = store();
        store.append_player_turn("u1", "hi Ted");
        store.append_npc_turn("u1", "hello");

        let barry = store.switch_npc("u1", "Barry").unwrap();
        assert_eq!(barry.npc_name, "Barry");
        assert!(barry.history.is_empty());

        let ted = store.switch_npc("u1", "Ted").unwrap();
        assert_eq!(
            ted.history,
            vec!["Player: hi Ted".to_string(), "Ted: hello".to_string()]
        );
    }

    #[test]
    fn test_switch_to_unknown_npc_keeps_pointer() {
        let store = store();
        let result = store.switch_npc("u1", "Nobody");
        assert!(matches!(result, Err(SessionError::NpcNotFound(_))));

        let snapshot = store.get_or_create("u1");
        assert_eq!(snapshot.current_npc, "Ted");
    }

    #[test]
    fn test_reset_conversation_clears_history_and_status() {
        let store = store();
        store.append_player_turn("u1", "hi");
        store.set_task_status("u1", "accepted");

        store.reset_conversation("u1", None, None);

        let conv = store.current_conversation("u1");
        assert!(conv.history.is_empty());
        assert_eq!(conv.task_status, "start");
        // 人设回到懒加载
        assert_eq!(conv.persona, "Ted persona");
    }

    #[test]
    fn test_session_reset_recreates_defaults() {
        let store = store();
        store.append_player_turn("u1", "hi");
        store.switch_npc("u1", "Mike").unwrap();

        store.reset("u1");

        let snapshot = store.get_or_create("u1");
        assert_eq!(snapshot.current_npc, "Ted");
        let conv = store.current_conversation("u1");
        assert!(conv.history.is_empty());
    }

    #[test]
    fn test_unknown_task_status_roundtrips() {
        let store = store();
        store.set_task_status("u1", "lowoption");
        assert_eq!(store.task_status("u1"), "lowoption");
    }

    #[test]
    fn test_expired_sessions() {
        let store = store();
        store.get_or_create("u1");

        assert!(store.expired_sessions(3600).is_empty());
        // 回拨活动时间模拟空闲
        store
            .sessions
            .get_mut("u1")
            .unwrap()
            .last_activity = Utc::now() - chrono::Duration::seconds(10);
        assert_eq!(store.expired_sessions(5), vec!["u1".to_string()]);
    }
}
