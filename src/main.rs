//! npchat - 脚本化 NPC 对话服务
//!
//! 玩家通过 HTTP 接口与固定名单里的 NPC 聊天：
//! - 每个 NPC 有独立的人设文件和任务状态
//! - 会话状态全部在进程内存中，空闲会话由 GC 回收

use std::sync::Arc;

use npchat::config::{load_config, print_config};
use npchat::infrastructure::adapters::{FilePersonaSource, HttpLlmClient, HttpLlmClientConfig};
use npchat::infrastructure::http::{AppState, HttpServer, ServerConfig};
use npchat::infrastructure::memory::{InMemorySessionStore, SessionStoreConfig};
use npchat::infrastructure::worker::{SessionGc, SessionGcConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},npchat={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("npchat - NPC 对话服务");
    print_config(&config);

    // 人设来源：每个 NPC 一个文本文件
    let persona_source = Arc::new(FilePersonaSource::new(config.npc.personas_dir.clone()));

    // 内存会话存储
    let store_config = SessionStoreConfig {
        roster: config.npc.roster.clone(),
        default_npc: config.npc.default_npc.clone(),
        player_name: config.npc.player_name.clone(),
    };
    let session_store = Arc::new(InMemorySessionStore::new(store_config, persona_source));

    // LLM 客户端
    let llm_config = HttpLlmClientConfig {
        base_url: config.llm.url.clone(),
        model: config.llm.model.clone(),
        api_key: config.llm.api_key.clone(),
        timeout_secs: config.llm.timeout_secs,
        temperature: config.llm.temperature,
        max_tokens: config.llm.max_tokens,
    };
    let llm_client = Arc::new(HttpLlmClient::new(llm_config)?);

    // 空闲会话 GC
    if config.gc.enabled {
        let gc = SessionGc::new(
            SessionGcConfig {
                interval_secs: config.gc.interval_secs,
                session_expire_secs: config.gc.session_expire_secs,
            },
            session_store.clone(),
        );
        tokio::spawn(gc.run());
    }

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(session_store, llm_client);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
