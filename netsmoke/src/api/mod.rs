//! エコーAPIハンドラー
//!
//! 全メソッド・全パスに対して同一のエコーレスポンスを返す。
//! ルーティングは行わない。

use crate::AppState;
use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use tracing::{info, warn};

/// エコーアプリケーションを作成する
pub fn create_app(state: AppState) -> Router {
    Router::new().fallback(echo).with_state(state)
}

/// 全リクエスト共通のエコーハンドラー
///
/// メソッド・URI・ヘッダーをログに出してからボディを読み捨て、
/// `Test <epoch-ms> <instance-id>` を200で返す。
async fn echo(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    info!(
        method = %parts.method,
        uri = %parts.uri,
        headers = ?parts.headers,
        "Incoming request"
    );

    // ボディは内容を無視して読み切る（サイズ制限なし）
    if let Err(e) = to_bytes(body, usize::MAX).await {
        warn!(error = %e, "Failed to drain request body");
    }

    let reply = format!(
        "Test {} {}",
        Utc::now().timestamp_millis(),
        state.config.instance_id
    );

    // Content-Typeは付与しない
    Response::new(Body::from(reply))
}
