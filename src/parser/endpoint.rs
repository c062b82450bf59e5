use std::net::IpAddr;

use crate::error::{NetsnapError, Result};
use crate::model::Endpoint;

/// Address or port placeholder netstat prints for "any".
pub const WILDCARD: &str = "*";

/// Parse an address column token: `address[%zone]:port`, where the port may
/// be `*` and an IPv6 address may be wrapped in brackets.
///
/// A bare `*` (or a `*` address) yields [`Endpoint::wildcard`]. A port that
/// is not a number in `0..=65535` is kept as the unknown sentinel rather
/// than failing the token.
pub fn parse_endpoint(token: &str) -> Result<Endpoint> {
    if token == WILDCARD {
        return Ok(Endpoint::wildcard());
    }

    let malformed = || NetsnapError::Endpoint(token.to_string());

    let (addr, port) = token.rsplit_once(':').ok_or_else(malformed)?;
    if addr.is_empty() {
        return Err(malformed());
    }
    if addr == WILDCARD {
        return Ok(Endpoint::wildcard());
    }

    let host = strip_zone(strip_brackets(addr)).ok_or_else(malformed)?;
    let ip: IpAddr = host.parse().map_err(|_| malformed())?;

    Ok(Endpoint {
        ip,
        port: parse_port(port),
    })
}

fn parse_port(port: &str) -> Option<u16> {
    if port == WILDCARD {
        return None;
    }
    port.parse().ok()
}

fn strip_brackets(addr: &str) -> &str {
    addr.strip_prefix('[')
        .and_then(|a| a.strip_suffix(']'))
        .unwrap_or(addr)
}

/// Drop a `%zone` scope suffix. `None` if a `%` is present with an empty or
/// non-alphanumeric zone.
fn strip_zone(addr: &str) -> Option<&str> {
    match addr.split_once('%') {
        None => Some(addr),
        Some((host, zone)) => {
            if zone.is_empty() || !zone.bytes().all(|b| b.is_ascii_alphanumeric()) {
                None
            } else {
                Some(host)
            }
        }
    }
}
