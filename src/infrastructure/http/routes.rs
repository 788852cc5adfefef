//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /userId                  GET   生成用户标识
//! - /conversations/{userId}  GET   当前 NPC 的累计对话历史
//! - /conversations/{userId}  POST  发送消息，返回 NPC 回复
//! - /changeNPC/{userId}      POST  切换当前 NPC，返回其人设和历史
//! - /reset/{userId}          POST  重置当前 NPC 的历史和任务状态
//! - /resetSession/{userId}   POST  丢弃整个会话
//! - /getConfigStr/{userId}   GET   当前 NPC 的人设文本
//! - /setConfigStr/{userId}   POST  覆盖人设文本（对话随之重置）
//! - /getTaskStatus/{userId}  GET   当前 NPC 的任务状态
//! - /setTaskStatus/{userId}  POST  覆盖任务状态（不做枚举校验）
//! - /ping                    GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/userId", get(handlers::user_id))
        .route(
            "/conversations/:user_id",
            get(handlers::get_conversation).post(handlers::send_message),
        )
        .route("/changeNPC/:user_id", post(handlers::change_npc))
        .route("/reset/:user_id", post(handlers::reset_conversation))
        .route("/resetSession/:user_id", post(handlers::reset_session))
        .route("/getConfigStr/:user_id", get(handlers::get_config_str))
        .route("/setConfigStr/:user_id", post(handlers::set_config_str))
        .route("/getTaskStatus/:user_id", get(handlers::get_task_status))
        .route("/setTaskStatus/:user_id", post(handlers::set_task_status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{
        FakeLlmClient, FakeLlmClientConfig, FilePersonaSource,
    };
    use crate::infrastructure::memory::{InMemorySessionStore, SessionStoreConfig};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    const FAKE_REPLY: &str = "(grin) Hello there.";

    /// 搭一个带临时人设目录和 Fake LLM 的完整路由
    fn test_router(fail_llm: bool) -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        for name in ["Ted", "Barry", "Mike"] {
            std::fs::write(
                dir.path().join(format!("{}_en.txt", name)),
                format!("Name: {}\nJob: villager\n", name),
            )
            .unwrap();
        }

        let persona_source = Arc::new(FilePersonaSource::new(dir.path()));
        let session_store = Arc::new(InMemorySessionStore::new(
            SessionStoreConfig::default(),
            persona_source,
        ));
        let llm_client = Arc::new(FakeLlmClient::new(FakeLlmClientConfig {
            reply: FAKE_REPLY.to_string(),
            delay_ms: 0,
            fail_invalid_request: fail_llm,
        }));

        let state = Arc::new(AppState::new(session_store, llm_client));
        (create_routes().with_state(state), dir)
    }

    async fn send(
        router: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(v) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_ping() {
        let (router, _dir) = test_router(false);
        let (status, body) = send(&router, "GET", "/ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_user_id_is_a_uuid() {
        let (router, _dir) = test_router(false);
        let (status, body) = send(&router, "GET", "/userId", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(uuid::Uuid::parse_str(body["userId"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_first_conversation_scenario() {
        let (router, _dir) = test_router(false);

        // 新用户：Ted，历史为空
        let (status, body) = send(&router, "GET", "/conversations/u1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["npc_name"], "Ted");
        assert_eq!(body["conversation"], json!([]));

        // 发消息得到非空回复
        let (status, body) = send(
            &router,
            "POST",
            "/conversations/u1",
            Some(json!({"message": "hi"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], FAKE_REPLY);

        // 历史里先是玩家发言，然后是 NPC 回复
        let (_, body) = send(&router, "GET", "/conversations/u1", None).await;
        assert_eq!(
            body["conversation"],
            json!(["Player: hi", format!("Ted: {}", FAKE_REPLY)])
        );
    }

    #[tokio::test]
    async fn test_empty_message_rejected_without_mutation() {
        let (router, _dir) = test_router(false);

        let (status, body) = send(
            &router,
            "POST",
            "/conversations/u1",
            Some(json!({"message": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Message is required");

        // 字段缺失同样 400
        let (status, _) = send(&router, "POST", "/conversations/u1", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // 历史没有被污染
        let (_, body) = send(&router, "GET", "/conversations/u1", None).await;
        assert_eq!(body["conversation"], json!([]));
    }

    #[tokio::test]
    async fn test_change_npc_returns_persona_and_history() {
        let (router, _dir) = test_router(false);

        let (status, body) = send(
            &router,
            "POST",
            "/changeNPC/u1",
            Some(json!({"npc_name": "Barry"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["npc_name"], "Barry");
        assert_eq!(body["config_str"], "Name: Barry\nJob: villager\n");
        assert_eq!(body["conversation"], json!([]));
    }

    #[tokio::test]
    async fn test_change_npc_unknown_is_404_and_keeps_pointer() {
        let (router, _dir) = test_router(false);

        let (status, body) = send(
            &router,
            "POST",
            "/changeNPC/u1",
            Some(json!({"npc_name": "Nobody"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("Nobody"));

        let (_, body) = send(&router, "GET", "/conversations/u1", None).await;
        assert_eq!(body["npc_name"], "Ted");
    }

    #[tokio::test]
    async fn test_switching_back_preserves_history_verbatim() {
        let (router, _dir) = test_router(false);

        send(
            &router,
            "POST",
            "/conversations/u1",
            Some(json!({"message": "hi Ted"})),
        )
        .await;
        send(
            &router,
            "POST",
            "/changeNPC/u1",
            Some(json!({"npc_name": "Mike"})),
        )
        .await;

        let (_, body) = send(
            &router,
            "POST",
            "/changeNPC/u1",
            Some(json!({"npc_name": "Ted"})),
        )
        .await;
        assert_eq!(
            body["conversation"],
            json!(["Player: hi Ted", format!("Ted: {}", FAKE_REPLY)])
        );
    }

    #[tokio::test]
    async fn test_config_str_roundtrip_verbatim() {
        let (router, _dir) = test_router(false);

        let persona = "Name: Ted\nJob: retired smuggler\nStyle: short, wary sentences";
        let (status, _) = send(
            &router,
            "POST",
            "/setConfigStr/u1",
            Some(json!({"config_str": persona})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&router, "GET", "/getConfigStr/u1", None).await;
        assert_eq!(body["config_str"], persona);
    }

    #[tokio::test]
    async fn test_set_config_str_resets_conversation() {
        let (router, _dir) = test_router(false);

        send(
            &router,
            "POST",
            "/conversations/u1",
            Some(json!({"message": "hi"})),
        )
        .await;
        send(
            &router,
            "POST",
            "/setConfigStr/u1",
            Some(json!({"config_str": "new persona"})),
        )
        .await;

        let (_, body) = send(&router, "GET", "/conversations/u1", None).await;
        assert_eq!(body["conversation"], json!([]));
    }

    #[tokio::test]
    async fn test_task_status_roundtrip_without_validation() {
        let (router, _dir) = test_router(false);

        let (_, body) = send(&router, "GET", "/getTaskStatus/u1", None).await;
        assert_eq!(body["task_status"], "start");

        // 枚举内的值
        send(
            &router,
            "POST",
            "/setTaskStatus/u1",
            Some(json!({"task_status": "accepted"})),
        )
        .await;
        let (_, body) = send(&router, "GET", "/getTaskStatus/u1", None).await;
        assert_eq!(body["task_status"], "accepted");

        // 枚举外的值原样保存
        send(
            &router,
            "POST",
            "/setTaskStatus/u1",
            Some(json!({"task_status": "lowoption"})),
        )
        .await;
        let (_, body) = send(&router, "GET", "/getTaskStatus/u1", None).await;
        assert_eq!(body["task_status"], "lowoption");
    }

    #[tokio::test]
    async fn test_reset_clears_current_npc_only() {
        let (router, _dir) = test_router(false);

        send(
            &router,
            "POST",
            "/conversations/u1",
            Some(json!({"message": "hi"})),
        )
        .await;
        send(
            &router,
            "POST",
            "/setTaskStatus/u1",
            Some(json!({"task_status": "accepted"})),
        )
        .await;

        let (status, body) = send(&router, "POST", "/reset/u1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Conversations reset");

        let (_, body) = send(&router, "GET", "/conversations/u1", None).await;
        assert_eq!(body["conversation"], json!([]));
        let (_, body) = send(&router, "GET", "/getTaskStatus/u1", None).await;
        assert_eq!(body["task_status"], "start");
    }

    #[tokio::test]
    async fn test_reset_session_recreates_defaults() {
        let (router, _dir) = test_router(false);

        send(
            &router,
            "POST",
            "/changeNPC/u1",
            Some(json!({"npc_name": "Mike"})),
        )
        .await;
        send(
            &router,
            "POST",
            "/conversations/u1",
            Some(json!({"message": "hi Mike"})),
        )
        .await;

        let (status, body) = send(&router, "POST", "/resetSession/u1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Session reset");

        // 回到默认 NPC，历史为空
        let (_, body) = send(&router, "GET", "/conversations/u1", None).await;
        assert_eq!(body["npc_name"], "Ted");
        assert_eq!(body["conversation"], json!([]));
    }

    #[tokio::test]
    async fn test_llm_rejection_masked_as_fallback_reply() {
        let (router, _dir) = test_router(true);

        let (status, body) = send(
            &router,
            "POST",
            "/conversations/u1",
            Some(json!({"message": "hi"})),
        )
        .await;
        // 对调用方表现为成功，回复被替换为固定文案
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "出错了！");

        // 玩家发言已入历史，NPC 回复没有
        let (_, body) = send(&router, "GET", "/conversations/u1", None).await;
        assert_eq!(body["conversation"], json!(["Player: hi"]));
    }
}
