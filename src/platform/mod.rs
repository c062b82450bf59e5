use crate::error::Result;
use crate::model::{ProcessHandle, Protocol};

/// Produces the raw netstat table for one protocol.
pub trait NetstatSource: Send + Sync {
    fn fetch(&self, protocol: Protocol) -> Result<Vec<u8>>;
}

/// Resolves a PID against the process table.
pub trait ProcessLookup: Send + Sync {
    /// Reload the process table. Called once per snapshot before any lookup.
    fn refresh(&mut self) -> Result<()> {
        Ok(())
    }

    /// `Ok(None)` when no such process is running.
    fn find_process(&self, pid: u32) -> Result<Option<ProcessHandle>>;
}

#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// netstat executable to run.
    pub program: String,
    /// Run the program through `cmd /C`.
    pub shell: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            program: "netstat".to_string(),
            shell: false,
        }
    }
}

mod file;
mod netstat;
mod process;

pub use file::FileSource;
pub use netstat::NetstatCommand;
pub use process::SysinfoLookup;

pub fn create_source(config: SourceConfig) -> Box<dyn NetstatSource> {
    Box::new(NetstatCommand::new(config))
}

pub fn create_lookup() -> Box<dyn ProcessLookup> {
    Box::new(SysinfoLookup::new())
}
