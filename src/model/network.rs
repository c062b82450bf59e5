use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

use serde::Serialize;

/// Transport/address-family combination a snapshot is taken for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
pub enum Protocol {
    Tcp,
    Tcp6,
    Udp,
    Udp6,
}

impl Protocol {
    pub const ALL: [Protocol; 4] = [Protocol::Tcp, Protocol::Tcp6, Protocol::Udp, Protocol::Udp6];

    /// Value passed to `netstat -p` to select this protocol's table.
    pub fn selector(&self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Tcp6 => "tcpv6",
            Protocol::Udp => "udp",
            Protocol::Udp6 => "udpv6",
        }
    }

    /// Protocol column value printed on this table's data rows.
    pub fn transport(&self) -> &'static str {
        match self {
            Protocol::Tcp | Protocol::Tcp6 => "TCP",
            Protocol::Udp | Protocol::Udp6 => "UDP",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Tcp => write!(f, "TCP"),
            Protocol::Tcp6 => write!(f, "TCP6"),
            Protocol::Udp => write!(f, "UDP"),
            Protocol::Udp6 => write!(f, "UDP6"),
        }
    }
}

/// An IP address and port as printed in a netstat address column.
///
/// `port` is `None` for the wildcard/unknown sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub ip: IpAddr,
    pub port: Option<u16>,
}

impl Endpoint {
    pub fn new(ip: IpAddr, port: u16) -> Self {
        Endpoint { ip, port: Some(port) }
    }

    /// The `*` / `*:*` endpoint: unspecified address, unknown port.
    pub fn wildcard() -> Self {
        Endpoint {
            ip: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ip {
            IpAddr::V4(ip) => write!(f, "{}", ip)?,
            IpAddr::V6(ip) => write!(f, "[{}]", ip)?,
        }
        match self.port {
            Some(port) => write!(f, ":{}", port),
            None => write!(f, ":*"),
        }
    }
}

/// Foreign address column of a row. A token that does not parse is kept
/// verbatim instead of dropping the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteEndpoint {
    Resolved(Endpoint),
    Unresolved(String),
}
