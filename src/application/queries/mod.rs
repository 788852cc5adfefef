//! 应用层 - 查询（读操作）

mod chat_queries;

pub mod handlers;

pub use chat_queries::{
    GetConversationQuery, GetConversationResponse, GetPersonaQuery, GetPersonaResponse,
    GetTaskStatusQuery, GetTaskStatusResponse,
};
