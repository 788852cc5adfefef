//! User Handlers

use axum::Json;
use uuid::Uuid;

use crate::infrastructure::http::dto::UserIdResponse;

/// 生成一个新的用户标识
///
/// 服务端不追踪已发放的 ID，任何字符串都可以作为会话 key
pub async fn user_id() -> Json<UserIdResponse> {
    Json(UserIdResponse {
        user_id: Uuid::new_v4().to_string(),
    })
}
