//! Memory Layer - In-Memory State Management
//!
//! 实现 SessionStore，管理玩家会话与 NPC 对话的内存状态

mod session_store;

pub use session_store::{InMemorySessionStore, SessionStoreConfig};
