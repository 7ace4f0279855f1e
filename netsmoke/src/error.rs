//! エラー型定義
//!
//! 統一エラー型（thiserror使用）。起動時の設定解決エラーは
//! エントリポイントで検査され、診断メッセージとともに終了する。

use thiserror::Error;

/// netsmoke error type
#[derive(Debug, Error)]
pub enum SmokeError {
    /// Logging initialization error
    #[error("Logging initialization error: {0}")]
    Logging(String),

    /// Network interface enumeration failed
    #[error("Failed to enumerate network interfaces: {0}")]
    InterfaceEnumeration(String),

    /// Named interface does not exist on this host
    #[error("Network interface not found: {0}")]
    InterfaceNotFound(String),

    /// Named interface has no IPv4 address
    #[error("No IPv4 address on interface: {0}")]
    NoIpv4Address(String),

    /// Failed to bind the listen address
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// The address that could not be bound
        addr: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Server I/O error
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Result type alias
pub type SmokeResult<T> = Result<T, SmokeError>;
