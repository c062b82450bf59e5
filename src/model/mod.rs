pub mod entry;
pub mod network;
pub mod process;
pub mod record;

pub use entry::RawEntry;
pub use network::{Endpoint, Protocol, RemoteEndpoint};
pub use process::ProcessHandle;
pub use record::{ConnectionRecord, UNKNOWN};
