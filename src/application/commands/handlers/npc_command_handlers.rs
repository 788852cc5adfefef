//! Npc Command Handlers

use std::sync::Arc;

use crate::application::commands::npc_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::SessionStorePort;

/// SwitchNpc Handler - 切换当前 NPC
///
/// 非当前 NPC 的对话不会被销毁，切回时历史原样保留
pub struct SwitchNpcHandler {
    session_store: Arc<dyn SessionStorePort>,
}

impl SwitchNpcHandler {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    pub fn handle(&self, cmd: SwitchNpcCommand) -> Result<SwitchNpcResponse, ApplicationError> {
        let snapshot = self.session_store.switch_npc(&cmd.user_id, &cmd.npc_name)?;

        tracing::info!(
            user_id = %cmd.user_id,
            npc_name = %snapshot.npc_name,
            history_len = snapshot.history.len(),
            "Current NPC switched"
        );

        Ok(SwitchNpcResponse {
            npc_name: snapshot.npc_name,
            config_str: snapshot.persona,
            conversation: snapshot.history,
        })
    }
}

/// SetPersona Handler - 覆盖当前 NPC 的人设
///
/// 人设写入走 reset：历史清空、任务状态回到初始值
pub struct SetPersonaHandler {
    session_store: Arc<dyn SessionStorePort>,
}

impl SetPersonaHandler {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    pub fn handle(&self, cmd: SetPersonaCommand) -> Result<SetPersonaResponse, ApplicationError> {
        let snapshot = self.session_store.get_or_create(&cmd.user_id);

        self.session_store
            .reset_conversation(&cmd.user_id, Some(cmd.config_str), None);

        tracing::info!(
            user_id = %cmd.user_id,
            npc_name = %snapshot.current_npc,
            "Persona overridden"
        );

        Ok(SetPersonaResponse {
            npc_name: snapshot.current_npc,
        })
    }
}

/// SetTaskStatus Handler - 覆盖当前 NPC 的任务状态
///
/// 写入不做枚举校验，未知状态只是不产生提示语
pub struct SetTaskStatusHandler {
    session_store: Arc<dyn SessionStorePort>,
}

impl SetTaskStatusHandler {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    pub fn handle(
        &self,
        cmd: SetTaskStatusCommand,
    ) -> Result<SetTaskStatusResponse, ApplicationError> {
        let snapshot = self.session_store.get_or_create(&cmd.user_id);

        self.session_store
            .set_task_status(&cmd.user_id, &cmd.task_status);

        tracing::info!(
            user_id = %cmd.user_id,
            npc_name = %snapshot.current_npc,
            task_status = %cmd.task_status,
            "Task status set"
        );

        Ok(SetTaskStatusResponse {
            npc_name: snapshot.current_npc,
            task_status: cmd.task_status,
        })
    }
}
