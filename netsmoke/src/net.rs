//! 近隣アドレス解決
//!
//! ローカルインタフェースの最初のIPv4アドレスから、最終オクテットを `1` に
//! 置き換えた「ゲートウェイ相当」の近隣アドレスを導出する。起動時に一度だけ
//! 実行され、以後は再解決しない。

use crate::error::{SmokeError, SmokeResult};
use network_interface::{NetworkInterface, NetworkInterfaceConfig};
use std::net::{IpAddr, Ipv4Addr};
use tracing::info;

/// 既定のインタフェース名
pub const DEFAULT_INTERFACE: &str = "eth0";

/// 近隣アドレスを解決する
///
/// 指定名のインタフェースが存在しない、またはIPv4アドレスを持たない場合は
/// エラーを返す（エントリポイントで検査される）。
pub fn resolve_neighbor(interface: &str) -> SmokeResult<Ipv4Addr> {
    let interfaces = NetworkInterface::show()
        .map_err(|e| SmokeError::InterfaceEnumeration(e.to_string()))?;

    for iface in &interfaces {
        info!(name = %iface.name, addr = ?iface.addr, "Found network interface");
    }

    let local = first_ipv4(&interfaces, interface)?;
    let neighbor = neighbor_of(local);

    info!(interface, local = %local, neighbor = %neighbor, "Resolved neighbor address");

    Ok(neighbor)
}

/// 指定名のインタフェースの最初のIPv4アドレスを返す
fn first_ipv4(interfaces: &[NetworkInterface], name: &str) -> SmokeResult<Ipv4Addr> {
    let iface = interfaces
        .iter()
        .find(|iface| iface.name == name)
        .ok_or_else(|| SmokeError::InterfaceNotFound(name.to_string()))?;

    iface
        .addr
        .iter()
        .find_map(|addr| match addr.ip() {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        })
        .ok_or_else(|| SmokeError::NoIpv4Address(name.to_string()))
}

/// 最終オクテットを `1` に置き換える
///
/// ゲートウェイがサブネットの `.1` にいる前提の導出。
pub fn neighbor_of(addr: Ipv4Addr) -> Ipv4Addr {
    let [a, b, c, _] = addr.octets();
    Ipv4Addr::new(a, b, c, 1)
}
