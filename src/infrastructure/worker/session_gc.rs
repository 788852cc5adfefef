//! Session GC - 空闲会话回收
//!
//! 后台循环，定期丢弃超过空闲时限的会话，避免进程内状态无界增长

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::SessionStorePort;

/// GC 配置
#[derive(Debug, Clone)]
pub struct SessionGcConfig {
    /// 扫描间隔（秒）
    pub interval_secs: u64,
    /// 会话空闲时限（秒）
    pub session_expire_secs: u64,
}

impl Default for SessionGcConfig {
    fn default() -> Self {
        Self {
            interval_secs: 3600,
            session_expire_secs: 86400,
        }
    }
}

/// 会话 GC Worker
pub struct SessionGc {
    config: SessionGcConfig,
    session_store: Arc<dyn SessionStorePort>,
}

impl SessionGc {
    pub fn new(config: SessionGcConfig, session_store: Arc<dyn SessionStorePort>) -> Self {
        Self {
            config,
            session_store,
        }
    }

    /// 启动 GC 循环
    pub async fn run(self) {
        tracing::info!(
            interval_secs = self.config.interval_secs,
            session_expire_secs = self.config.session_expire_secs,
            "SessionGc started"
        );

        let mut interval = tokio::time::interval(Duration::from_secs(self.config.interval_secs));
        // 首次 tick 立即返回，跳过
        interval.tick().await;

        loop {
            interval.tick().await;

            let expired = self
                .session_store
                .expired_sessions(self.config.session_expire_secs);

            if expired.is_empty() {
                continue;
            }

            for user_id in &expired {
                self.session_store.reset(user_id);
            }

            tracing::info!(evicted = expired.len(), "Idle sessions evicted");
        }
    }
}
