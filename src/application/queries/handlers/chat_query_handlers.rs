//! Chat Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::SessionStorePort;
use crate::application::queries::chat_queries::*;

/// GetConversation Handler - 当前 NPC 的渲染历史
pub struct GetConversationHandler {
    session_store: Arc<dyn SessionStorePort>,
}

impl GetConversationHandler {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    pub fn handle(
        &self,
        query: GetConversationQuery,
    ) -> Result<GetConversationResponse, ApplicationError> {
        let snapshot = self.session_store.current_conversation(&query.user_id);

        Ok(GetConversationResponse {
            npc_name: snapshot.npc_name,
            conversation: snapshot.history,
        })
    }
}

/// GetPersona Handler - 当前 NPC 的人设文本（懒加载后原样返回）
pub struct GetPersonaHandler {
    session_store: Arc<dyn SessionStorePort>,
}

impl GetPersonaHandler {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    pub fn handle(&self, query: GetPersonaQuery) -> Result<GetPersonaResponse, ApplicationError> {
        let snapshot = self.session_store.get_or_create(&query.user_id);
        let config_str = self.session_store.persona(&query.user_id);

        Ok(GetPersonaResponse {
            npc_name: snapshot.current_npc,
            config_str,
        })
    }
}

/// GetTaskStatus Handler - 当前 NPC 的任务状态
pub struct GetTaskStatusHandler {
    session_store: Arc<dyn SessionStorePort>,
}

impl GetTaskStatusHandler {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    pub fn handle(
        &self,
        query: GetTaskStatusQuery,
    ) -> Result<GetTaskStatusResponse, ApplicationError> {
        let snapshot = self.session_store.get_or_create(&query.user_id);
        let task_status = self.session_store.task_status(&query.user_id);

        Ok(GetTaskStatusResponse {
            npc_name: snapshot.current_npc,
            task_status,
        })
    }
}
