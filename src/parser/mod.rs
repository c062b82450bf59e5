pub mod endpoint;
pub mod entry;

pub use endpoint::parse_endpoint;
pub use entry::parse_entry;

use log::debug;

use crate::model::{Protocol, RawEntry};

/// Parse netstat output into the entries for `protocol`, in the order they
/// appear.
///
/// Non-data lines are skipped, and so are rows of the other transport, so
/// output of a plain `netstat -ano` (TCP and UDP mixed) can be fed for any
/// protocol.
pub fn parse_output(text: &str, protocol: Protocol) -> Vec<RawEntry> {
    let mut entries = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        let Some(entry) = parse_entry(line) else {
            continue;
        };

        if !entry.proto.eq_ignore_ascii_case(protocol.transport()) {
            debug!("line {}: skipping {} row in {} output", lineno + 1, entry.proto, protocol);
            continue;
        }

        entries.push(entry);
    }

    debug!("parsed {} {} entries", entries.len(), protocol);
    entries
}
