//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    ResetConversationHandler, ResetSessionHandler, SendMessageHandler, SetPersonaHandler,
    SetTaskStatusHandler, SwitchNpcHandler,
    // Query handlers
    GetConversationHandler, GetPersonaHandler, GetTaskStatusHandler,
    // Ports
    LlmClientPort, SessionStorePort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub session_store: Arc<dyn SessionStorePort>,
    pub llm_client: Arc<dyn LlmClientPort>,

    // ========== Command Handlers ==========
    pub send_message_handler: SendMessageHandler,
    pub switch_npc_handler: SwitchNpcHandler,
    pub reset_conversation_handler: ResetConversationHandler,
    pub set_persona_handler: SetPersonaHandler,
    pub set_task_status_handler: SetTaskStatusHandler,
    pub reset_session_handler: ResetSessionHandler,

    // ========== Query Handlers ==========
    pub get_conversation_handler: GetConversationHandler,
    pub get_persona_handler: GetPersonaHandler,
    pub get_task_status_handler: GetTaskStatusHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        session_store: Arc<dyn SessionStorePort>,
        llm_client: Arc<dyn LlmClientPort>,
    ) -> Self {
        Self {
            session_store: session_store.clone(),
            llm_client: llm_client.clone(),

            // Command handlers
            send_message_handler: SendMessageHandler::new(
                session_store.clone(),
                llm_client.clone(),
            ),
            switch_npc_handler: SwitchNpcHandler::new(session_store.clone()),
            reset_conversation_handler: ResetConversationHandler::new(session_store.clone()),
            set_persona_handler: SetPersonaHandler::new(session_store.clone()),
            set_task_status_handler: SetTaskStatusHandler::new(session_store.clone()),
            reset_session_handler: ResetSessionHandler::new(session_store.clone()),

            // Query handlers
            get_conversation_handler: GetConversationHandler::new(session_store.clone()),
            get_persona_handler: GetPersonaHandler::new(session_store.clone()),
            get_task_status_handler: GetTaskStatusHandler::new(session_store.clone()),
        }
    }
}
