//! serve サブコマンド
//!
//! プローバーとエコーサーバーを起動します。

use clap::Args;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Echo server listen port
    #[arg(short, long, default_value_t = crate::config::DEFAULT_PORT, env = "PORT")]
    pub port: u16,

    /// Interface used to derive the neighbor address
    #[arg(short, long, default_value = crate::net::DEFAULT_INTERFACE, env = "NETSMOKE_INTERFACE")]
    pub interface: String,
}
