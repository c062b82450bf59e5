use std::io::{self, Write};
use std::net::IpAddr;

use serde::Serialize;

use crate::cli::CliArgs;
use netsnap::{ConnectionRecord, Endpoint, Protocol};

/// Records of one protocol snapshot.
#[derive(Debug, Serialize)]
pub struct SnapshotOutput {
    pub protocol: Protocol,
    pub count: usize,
    pub records: Vec<ConnectionRecord>,
}

impl SnapshotOutput {
    pub fn new(protocol: Protocol, records: Vec<ConnectionRecord>) -> Self {
        SnapshotOutput {
            protocol,
            count: records.len(),
            records,
        }
    }
}

/// Renders snapshots as a table, a PID list, or JSON.
pub struct OutputFormatter {
    /// `-t` flag: PIDs only.
    pub terse: bool,
    /// `-j` flag: JSON document.
    pub json: bool,
}

impl OutputFormatter {
    pub fn from_cli(args: &CliArgs) -> Self {
        OutputFormatter {
            terse: args.terse,
            json: args.json,
        }
    }

    pub fn render(&self, snapshots: &[SnapshotOutput]) -> Result<String, serde_json::Error> {
        if self.json {
            return serde_json::to_string_pretty(snapshots);
        }
        if self.terse {
            return Ok(render_terse(snapshots));
        }

        let mut out = String::new();
        out.push_str(&header_line());
        out.push('\n');
        for snap in snapshots {
            for record in &snap.records {
                out.push_str(&record_line(record));
                out.push('\n');
            }
        }
        Ok(out)
    }

    pub fn print(&self, snapshots: &[SnapshotOutput]) -> netsnap::Result<()> {
        let text = self.render(snapshots)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        if self.json {
            stdout.write_all(b"\n")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn header_line() -> String {
    format!(
        "{:<5} {:<28} {:<28} {:<12} {:>6}  {:<20} {}",
        "PROTO", "LOCAL", "FOREIGN", "STATE", "PID", "NAME", "USER"
    )
}

fn record_line(record: &ConnectionRecord) -> String {
    format!(
        "{:<5} {:<28} {:<28} {:<12} {:>6}  {:<20} {}",
        record.protocol.to_string(),
        format_address(Some(record.ip), record.port),
        format_foreign(record),
        record.state,
        record.pid,
        record.name,
        record.user.as_deref().unwrap_or("-"),
    )
}

/// PIDs in first-seen order, one per line, without repeats.
fn render_terse(snapshots: &[SnapshotOutput]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for record in snapshots.iter().flat_map(|s| &s.records) {
        if !seen.contains(&record.pid.as_str()) {
            seen.push(&record.pid);
        }
    }
    let mut out = seen.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn format_address(ip: Option<IpAddr>, port: Option<u16>) -> String {
    match ip {
        Some(ip) => Endpoint { ip, port }.to_string(),
        None => "?:*".to_string(),
    }
}

fn format_foreign(record: &ConnectionRecord) -> String {
    match &record.foreign_raw {
        Some(raw) => raw.clone(),
        None => format_address(record.foreign_ip, record.foreign_port),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
