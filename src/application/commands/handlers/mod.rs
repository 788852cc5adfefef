//! Command Handlers 实现

mod chat_command_handlers;
mod npc_command_handlers;
mod session_command_handlers;

pub use chat_command_handlers::{ResetConversationHandler, SendMessageHandler};
pub use npc_command_handlers::{SetPersonaHandler, SetTaskStatusHandler, SwitchNpcHandler};
pub use session_command_handlers::ResetSessionHandler;
