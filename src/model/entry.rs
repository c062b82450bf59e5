use super::network::{Endpoint, RemoteEndpoint};

/// One data row of netstat output, before process correlation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Protocol column exactly as printed (e.g. `TCP`).
    pub proto: String,
    pub local: Endpoint,
    pub remote: RemoteEndpoint,
    pub state: String,
    pub pid: String,
}
