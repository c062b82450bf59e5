use std::path::PathBuf;

use clap::Parser;
use netsnap::Protocol;

#[derive(Parser, Debug)]
#[command(name = "netsnap", version, about = "Snapshot active connections and their owning processes")]
pub struct CliArgs {
    /// Protocols to query (comma-separated); all four when omitted
    #[arg(short = 'p', long = "proto", value_name = "PROTO", value_enum, value_delimiter = ',')]
    pub protocols: Vec<Protocol>,

    /// Parse saved netstat -ano output instead of running netstat
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// netstat executable to run
    #[arg(long = "netstat", value_name = "PATH", default_value = "netstat")]
    pub netstat: String,

    /// Run netstat through `cmd /C`
    #[arg(long = "shell")]
    pub shell: bool,

    /// Terse output: PIDs only
    #[arg(short = 't')]
    pub terse: bool,

    /// Emit JSON
    #[arg(short = 'j', long = "json", conflicts_with = "terse")]
    pub json: bool,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl CliArgs {
    pub fn selected_protocols(&self) -> Vec<Protocol> {
        if self.protocols.is_empty() {
            Protocol::ALL.to_vec()
        } else {
            let mut seen = Vec::new();
            for p in &self.protocols {
                if !seen.contains(p) {
                    seen.push(*p);
                }
            }
            seen
        }
    }
}
