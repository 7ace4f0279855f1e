//! 近隣アドレスの定期プローブ
//!
//! 1秒間隔で近隣アドレスへ `GET /example` を発行し、到達性を確認する。
//! 応答が得られればステータスコードを、失敗すればエラーをログに出すだけで、
//! リトライもバックオフも行わない（診断ツールのため）。

use crate::shutdown::ShutdownController;
use reqwest::Client;
use std::net::Ipv4Addr;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{error, info};

/// プローブ先のパス
pub const PROBE_PATH: &str = "/example";

/// プローブに付与する偽装Hostヘッダー
pub const PROBE_HOST_HEADER: &str = "centralitews.k8s.dev";

/// プローブのタイムアウト（秒）
const PROBE_TIMEOUT_SECS: u64 = 5;

/// デフォルトのプローブ間隔（ミリ秒）
const DEFAULT_PROBE_INTERVAL_MS: u64 = 1000;

/// 近隣アドレスプローバー
///
/// 固定間隔でプローブ先にGETリクエストを送信し、結果をログに出力する。
#[derive(Clone)]
pub struct NeighborProber {
    /// HTTPクライアント
    client: Client,
    /// プローブ先URL
    target_url: String,
    /// プローブ間隔（ミリ秒）
    interval_ms: u64,
}

impl NeighborProber {
    /// 近隣アドレスへのプローバーを作成（ポート80固定）
    pub fn new(neighbor: Ipv4Addr) -> Self {
        Self::for_target(format!("http://{}:80{}", neighbor, PROBE_PATH))
    }

    /// 任意のURLへのプローバーを作成
    pub fn for_target(target_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            target_url,
            interval_ms: DEFAULT_PROBE_INTERVAL_MS,
        }
    }

    /// プローブ間隔を設定
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// プローブ先URLを返す
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    /// バックグラウンドでプローブループを開始
    pub fn start(self, shutdown: ShutdownController) -> JoinHandle<()> {
        tokio::spawn(async move { self.run(shutdown).await })
    }

    /// プローブループ
    async fn run(&self, shutdown: ShutdownController) {
        let mut timer = interval(Duration::from_millis(self.interval_ms));

        info!(
            target_url = %self.target_url,
            interval_ms = self.interval_ms,
            "Neighbor prober started"
        );

        // `interval()` ticks immediately on the first call. The first probe
        // should land one full interval after startup.
        timer.tick().await;

        loop {
            tokio::select! {
                _ = shutdown.wait() => {
                    info!("Neighbor prober stopped");
                    return;
                }
                _ = timer.tick() => {
                    self.poll_once().await;
                }
            }
        }
    }

    /// 単発のプローブを実行し、結果をログに出力する
    ///
    /// 失敗してもエラーを返さない。ループは次のtickで継続する。
    pub async fn poll_once(&self) {
        let result = self
            .client
            .get(&self.target_url)
            .header(reqwest::header::HOST, PROBE_HOST_HEADER)
            .send()
            .await;

        match result {
            Ok(response) => {
                info!(status = response.status().as_u16(), "Probe response");
            }
            Err(e) => {
                error!(error = %e, "Probe failed");
            }
        }
    }
}
