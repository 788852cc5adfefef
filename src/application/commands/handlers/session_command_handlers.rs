//! Session Command Handlers

use std::sync::Arc;

use crate::application::commands::session_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::SessionStorePort;

/// ResetSession Handler - 丢弃用户的整个会话
///
/// 所有 NPC 对话不可恢复地销毁，下次访问重新创建默认结构
pub struct ResetSessionHandler {
    session_store: Arc<dyn SessionStorePort>,
}

impl ResetSessionHandler {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    pub fn handle(
        &self,
        cmd: ResetSessionCommand,
    ) -> Result<ResetSessionResponse, ApplicationError> {
        self.session_store.reset(&cmd.user_id);

        tracing::info!(user_id = %cmd.user_id, "Session reset");

        Ok(ResetSessionResponse {
            user_id: cmd.user_id,
        })
    }
}
