//! 应用层 - 命令（写操作）

mod chat_commands;
mod npc_commands;
mod session_commands;

pub mod handlers;

pub use chat_commands::{
    ResetConversationCommand, ResetConversationResponse, SendMessageCommand, SendMessageResponse,
};
pub use npc_commands::{
    SetPersonaCommand, SetPersonaResponse, SetTaskStatusCommand, SetTaskStatusResponse,
    SwitchNpcCommand, SwitchNpcResponse,
};
pub use session_commands::{ResetSessionCommand, ResetSessionResponse};
