//! Point-in-time socket-to-process snapshots built from `netstat -ano`
//! output.
//!
//! [`tcp`], [`tcp6`], [`udp`] and [`udp6`] run the system netstat and
//! resolve owners through the process table. Use [`Snapshotter`] directly to
//! supply other sources or to see why a snapshot failed.

pub mod correlate;
pub mod error;
pub mod model;
pub mod parser;
pub mod platform;
pub mod snapshot;

pub use error::{NetsnapError, Result};
pub use model::{ConnectionRecord, Endpoint, Protocol, RawEntry, RemoteEndpoint};
pub use snapshot::{Snapshotter, Stage};

use log::warn;
use platform::{create_lookup, create_source, SourceConfig};

pub fn tcp() -> Option<Vec<ConnectionRecord>> {
    query(Protocol::Tcp)
}

pub fn tcp6() -> Option<Vec<ConnectionRecord>> {
    query(Protocol::Tcp6)
}

pub fn udp() -> Option<Vec<ConnectionRecord>> {
    query(Protocol::Udp)
}

pub fn udp6() -> Option<Vec<ConnectionRecord>> {
    query(Protocol::Udp6)
}

/// `None` means no data could be collected this call, not that there are no
/// connections.
fn query(protocol: Protocol) -> Option<Vec<ConnectionRecord>> {
    let mut snapshotter = Snapshotter::new(create_source(SourceConfig::default()), create_lookup());
    match snapshotter.snapshot(protocol) {
        Ok(records) => Some(records),
        Err(e) => {
            warn!("{} snapshot failed: {}", protocol, e);
            None
        }
    }
}
