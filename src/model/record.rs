use std::net::IpAddr;

use serde::Serialize;

use super::network::Protocol;

/// Marker for a process or executable that could not be resolved.
pub const UNKNOWN: &str = "Unknown";

/// A socket enriched with the identity of its owning process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionRecord {
    pub protocol: Protocol,
    pub user: Option<String>,
    pub name: String,
    pub pid: String,
    pub exe: String,
    pub state: String,
    pub ip: IpAddr,
    pub port: Option<u16>,
    pub foreign_ip: Option<IpAddr>,
    pub foreign_port: Option<u16>,
    /// Foreign address token kept verbatim when it could not be parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_raw: Option<String>,
}
