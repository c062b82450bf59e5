use log::debug;

use super::endpoint::parse_endpoint;
use crate::model::{RawEntry, RemoteEndpoint};

/// First column of the column-header line.
pub const HEADER_KEYWORD: &str = "Proto";

/// Proto, local address, foreign address, state, PID.
pub const MIN_FIELDS: usize = 5;

/// Parse one line of `netstat -ano` output.
///
/// Returns `None` for lines that are not data rows: blank or short lines,
/// the column header, and rows whose local address does not parse. A foreign
/// address that does not parse is kept verbatim as
/// [`RemoteEndpoint::Unresolved`].
pub fn parse_entry(line: &str) -> Option<RawEntry> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let proto = fields[0];
    if proto == HEADER_KEYWORD {
        return None;
    }

    let local = match parse_endpoint(fields[1]) {
        Ok(ep) => ep,
        Err(e) => {
            debug!("skipping row with bad local address: {}", e);
            return None;
        }
    };

    let remote = match parse_endpoint(fields[2]) {
        Ok(ep) => RemoteEndpoint::Resolved(ep),
        Err(_) => RemoteEndpoint::Unresolved(fields[2].to_string()),
    };

    // State is the fourth column; the PID always closes the row.
    let state = fields[3].to_string();
    let pid = fields[fields.len() - 1].to_string();

    Some(RawEntry {
        proto: proto.to_string(),
        local,
        remote,
        state,
        pid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Endpoint;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_listening_row() {
        let entry = parse_entry("  TCP    0.0.0.0:135   0.0.0.0:0   LISTENING   460").unwrap();
        assert_eq!(entry.proto, "TCP");
        assert_eq!(entry.local, Endpoint::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 135));
        assert_eq!(
            entry.remote,
            RemoteEndpoint::Resolved(Endpoint::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0))
        );
        assert_eq!(entry.state, "LISTENING");
        assert_eq!(entry.pid, "460");
    }

    #[test]
    fn test_tab_separated_row() {
        let entry = parse_entry("TCP\t127.0.0.1:5939\t127.0.0.1:49673\tESTABLISHED\t3120").unwrap();
        assert_eq!(entry.state, "ESTABLISHED");
        assert_eq!(entry.pid, "3120");
    }

    #[test]
    fn test_ipv6_row() {
        let entry = parse_entry("  TCP    [::]:445   [::]:0   LISTENING   4").unwrap();
        assert_eq!(entry.local, Endpoint::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 445));
        assert_eq!(entry.pid, "4");
    }

    #[test]
    fn test_header_line_skipped() {
        assert!(parse_entry("  Proto  Local Address          Foreign Address        State           PID").is_none());
        assert!(parse_entry("Proto  Local Address  Foreign Address  State  PID").is_none());
    }

    #[test]
    fn test_short_lines_skipped() {
        assert!(parse_entry("").is_none());
        assert!(parse_entry("   ").is_none());
        assert!(parse_entry("Active Connections").is_none());
        assert!(parse_entry("  UDP    0.0.0.0:123    *:*    1988").is_none());
    }

    #[test]
    fn test_bad_local_address_skipped() {
        assert!(parse_entry("TCP  nonsense  0.0.0.0:0  LISTENING  460").is_none());
    }

    #[test]
    fn test_bad_remote_address_kept_verbatim() {
        let entry = parse_entry("TCP  10.0.0.2:50123  host.example:443  ESTABLISHED  812").unwrap();
        assert_eq!(entry.local, Endpoint::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)), 50123));
        assert_eq!(
            entry.remote,
            RemoteEndpoint::Unresolved("host.example:443".to_string())
        );
        assert_eq!(entry.state, "ESTABLISHED");
        assert_eq!(entry.pid, "812");
    }

    #[test]
    fn test_wildcard_remote() {
        let entry = parse_entry("UDP  0.0.0.0:500  *:*  -  3344").unwrap();
        assert_eq!(entry.remote, RemoteEndpoint::Resolved(Endpoint::wildcard()));
    }

    #[test]
    fn test_extra_columns_take_last_as_pid() {
        let entry = parse_entry("TCP  0.0.0.0:80  0.0.0.0:0  LISTENING  InHost  1200").unwrap();
        assert_eq!(entry.state, "LISTENING");
        assert_eq!(entry.pid, "1200");
    }
}
