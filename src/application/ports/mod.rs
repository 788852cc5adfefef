//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod llm_client;
mod persona_source;
mod session_store;

pub use llm_client::{ChatRequest, LlmClientPort, LlmError};
pub use persona_source::PersonaSourcePort;
pub use session_store::{
    ConversationSnapshot, SessionError, SessionSnapshot, SessionStorePort,
};
