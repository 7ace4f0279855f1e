//! netsmoke
//!
//! クラスタ内ネットワーク到達性を確認するスモークテストツール。
//! ローカルインタフェースから近隣アドレスを導出して毎秒プローブしつつ、
//! 自身を識別するエコーレスポンスを返すHTTPサーバーを提供する。

#![warn(missing_docs)]

/// エコーAPIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// エラー型定義
pub mod error;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 近隣アドレス解決
pub mod net;

/// 近隣アドレスの定期プローブ
pub mod probe;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;

/// Cooperative shutdown token
pub mod shutdown;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 起動時に一度だけ解決されるランタイム設定
    pub config: config::RuntimeConfig,
}
