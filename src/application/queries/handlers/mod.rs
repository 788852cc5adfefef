//! Query Handlers 实现

mod chat_query_handlers;

pub use chat_query_handlers::{GetConversationHandler, GetPersonaHandler, GetTaskStatusHandler};
