//! ロギング初期化ユーティリティ

use crate::error::{SmokeError, SmokeResult};
use tracing_subscriber::EnvFilter;

/// tracingサブスクライバを初期化する
///
/// フィルタは環境変数 `NETSMOKE_LOG_LEVEL`（未設定時は `info`）から構築する。
pub fn init() -> SmokeResult<()> {
    let filter =
        EnvFilter::try_from_env("NETSMOKE_LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| SmokeError::Logging(e.to_string()))
}
