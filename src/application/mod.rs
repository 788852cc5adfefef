//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 出站端口定义（SessionStore、LlmClient、PersonaSource）
//! - commands: 命令及处理器
//! - queries: 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Chat commands
    ResetConversationCommand,
    ResetConversationResponse,
    SendMessageCommand,
    SendMessageResponse,
    // Npc commands
    SetPersonaCommand,
    SetPersonaResponse,
    SetTaskStatusCommand,
    SetTaskStatusResponse,
    SwitchNpcCommand,
    SwitchNpcResponse,
    // Session commands
    ResetSessionCommand,
    ResetSessionResponse,
    // Handlers
    handlers::{
        ResetConversationHandler, ResetSessionHandler, SendMessageHandler, SetPersonaHandler,
        SetTaskStatusHandler, SwitchNpcHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // LLM client
    ChatRequest,
    LlmClientPort,
    LlmError,
    // Persona source
    PersonaSourcePort,
    // Session store
    ConversationSnapshot,
    SessionError,
    SessionSnapshot,
    SessionStorePort,
};

pub use queries::{
    GetConversationQuery,
    GetConversationResponse,
    GetPersonaQuery,
    GetPersonaResponse,
    GetTaskStatusQuery,
    GetTaskStatusResponse,
    // Handlers
    handlers::{GetConversationHandler, GetPersonaHandler, GetTaskStatusHandler},
};
