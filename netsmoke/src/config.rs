//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables and the
//! runtime configuration resolved once at startup.

use crate::error::SmokeResult;
use rand::Rng;
use std::net::Ipv4Addr;

/// 既定のリッスンポート
pub const DEFAULT_PORT: u16 = 3000;

/// Get an environment variable
///
/// # Returns
/// * `Some(value)` - The environment variable value
/// * `None` - The variable is not set
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Get an environment variable with a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Returns the default if the variable is not set or does not parse.
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    get_env(name).and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// 起動時に一度だけ構築されるランタイム設定
///
/// プローブタスクとエコーハンドラーの両方から参照される。
/// 構築後は読み取り専用。
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// エコーサーバーのリッスンポート
    pub port: u16,
    /// 近隣アドレスの導出に使うインタフェース名
    pub interface: String,
    /// 導出済み近隣アドレス（プロセス起動時に固定）
    pub neighbor: Ipv4Addr,
    /// プロセスごとのインスタンスID（[0, 1000] の一様乱数）
    pub instance_id: u16,
}

impl RuntimeConfig {
    /// インタフェースから近隣アドレスを解決し、設定を構築する
    pub fn resolve(port: u16, interface: String) -> SmokeResult<Self> {
        let neighbor = crate::net::resolve_neighbor(&interface)?;
        let instance_id = rand::rng().random_range(0..=1000);

        Ok(Self {
            port,
            interface,
            neighbor,
            instance_id,
        })
    }

    /// リッスンアドレス文字列を返す
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
