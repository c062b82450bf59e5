use std::fmt;

use log::debug;

use crate::correlate::correlate;
use crate::error::Result;
use crate::model::{ConnectionRecord, Protocol, RawEntry, RemoteEndpoint};
use crate::parser::parse_output;
use crate::platform::{NetstatSource, ProcessLookup};

/// Stages a snapshot moves through. Any stage before `Done` can end in
/// `Failed`, in which case nothing is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Invoking,
    Parsing,
    Correlating,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Invoking => write!(f, "invoking"),
            Stage::Parsing => write!(f, "parsing"),
            Stage::Correlating => write!(f, "correlating"),
            Stage::Done => write!(f, "done"),
            Stage::Failed => write!(f, "failed"),
        }
    }
}

/// Takes one point-in-time snapshot per call: fetch the netstat table,
/// parse it, and attach process identities to every row.
pub struct Snapshotter {
    source: Box<dyn NetstatSource>,
    lookup: Box<dyn ProcessLookup>,
}

impl Snapshotter {
    pub fn new(source: Box<dyn NetstatSource>, lookup: Box<dyn ProcessLookup>) -> Self {
        Snapshotter { source, lookup }
    }

    /// All-or-nothing: an error at any stage discards the whole snapshot.
    pub fn snapshot(&mut self, protocol: Protocol) -> Result<Vec<ConnectionRecord>> {
        self.snapshot_staged(protocol).1
    }

    /// Like [`snapshot`](Self::snapshot), also returning the terminal stage
    /// (`Done` or `Failed`) of this call.
    pub fn snapshot_staged(
        &mut self,
        protocol: Protocol,
    ) -> (Stage, Result<Vec<ConnectionRecord>>) {
        let mut stage = Stage::Invoking;
        match self.run(protocol, &mut stage) {
            Ok(records) => (Stage::Done, Ok(records)),
            Err(e) => {
                debug!("{} snapshot failed while {}: {}", protocol, stage, e);
                (Stage::Failed, Err(e))
            }
        }
    }

    fn run(&mut self, protocol: Protocol, stage: &mut Stage) -> Result<Vec<ConnectionRecord>> {
        let raw = self.source.fetch(protocol)?;

        *stage = Stage::Parsing;
        let text = String::from_utf8_lossy(&raw);
        let entries = parse_output(&text, protocol);

        *stage = Stage::Correlating;
        if !entries.is_empty() {
            self.lookup.refresh()?;
        }
        let records = entries
            .into_iter()
            .map(|entry| self.build_record(protocol, entry))
            .collect::<Result<Vec<_>>>()?;

        *stage = Stage::Done;
        debug!("{} snapshot: {} records", protocol, records.len());
        Ok(records)
    }

    fn build_record(&self, protocol: Protocol, entry: RawEntry) -> Result<ConnectionRecord> {
        let identity = correlate(&entry.pid, self.lookup.as_ref())?;

        let (foreign_ip, foreign_port, foreign_raw) = match entry.remote {
            RemoteEndpoint::Resolved(ep) => (Some(ep.ip), ep.port, None),
            RemoteEndpoint::Unresolved(raw) => (None, None, Some(raw)),
        };

        Ok(ConnectionRecord {
            protocol,
            user: identity.user,
            name: identity.name,
            pid: entry.pid,
            exe: identity.exe,
            state: entry.state,
            ip: entry.local.ip,
            port: entry.local.port,
            foreign_ip,
            foreign_port,
            foreign_raw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetsnapError;
    use crate::model::ProcessHandle;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    struct TextSource(&'static str);

    impl NetstatSource for TextSource {
        fn fetch(&self, _protocol: Protocol) -> Result<Vec<u8>> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    struct CountingLookup {
        refreshes: Arc<AtomicUsize>,
    }

    impl ProcessLookup for CountingLookup {
        fn refresh(&mut self) -> Result<()> {
            self.refreshes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn find_process(&self, pid: u32) -> Result<Option<ProcessHandle>> {
            Ok(Some(ProcessHandle {
                pid,
                executable: Some(format!("proc{}.exe", pid)),
                user: None,
            }))
        }
    }

    fn snapshotter(text: &'static str) -> (Snapshotter, Arc<AtomicUsize>) {
        let refreshes = Arc::new(AtomicUsize::new(0));
        let lookup = CountingLookup {
            refreshes: Arc::clone(&refreshes),
        };
        (
            Snapshotter::new(Box::new(TextSource(text)), Box::new(lookup)),
            refreshes,
        )
    }

    #[test]
    fn test_table_refreshed_once_per_snapshot() {
        let (mut snap, refreshes) =
            snapshotter("TCP 0.0.0.0:1 0.0.0.0:0 LISTENING 1\nTCP 0.0.0.0:2 0.0.0.0:0 LISTENING 2\n");
        snap.snapshot(Protocol::Tcp).unwrap();
        assert_eq!(refreshes.load(Ordering::SeqCst), 1);
        snap.snapshot(Protocol::Tcp).unwrap();
        assert_eq!(refreshes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_no_refresh_without_entries() {
        let (mut snap, refreshes) = snapshotter("Active Connections\n");
        assert!(snap.snapshot(Protocol::Tcp).unwrap().is_empty());
        assert_eq!(refreshes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unresolved_remote_kept_on_record() {
        let (mut snap, _) = snapshotter("TCP 10.1.1.1:5000 bogus ESTABLISHED 77\n");
        let records = snap.snapshot(Protocol::Tcp).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].port, Some(5000));
        assert_eq!(records[0].foreign_ip, None);
        assert_eq!(records[0].foreign_port, None);
        assert_eq!(records[0].foreign_raw.as_deref(), Some("bogus"));
        assert_eq!(records[0].name, "proc77");
    }

    #[test]
    fn test_bad_pid_discards_whole_snapshot() {
        let (mut snap, _) =
            snapshotter("TCP 0.0.0.0:1 0.0.0.0:0 LISTENING 1\nTCP 0.0.0.0:2 0.0.0.0:0 LISTENING x\n");
        let (stage, result) = snap.snapshot_staged(Protocol::Tcp);
        assert_eq!(stage, Stage::Failed);
        assert!(matches!(result, Err(NetsnapError::InvalidPid(_))));
    }

    /// Fails the first fetch only.
    struct FlakySource {
        failed_once: AtomicBool,
    }

    impl NetstatSource for FlakySource {
        fn fetch(&self, _protocol: Protocol) -> Result<Vec<u8>> {
            if !self.failed_once.swap(true, Ordering::SeqCst) {
                return Err(NetsnapError::Command("netstat exited with 1".to_string()));
            }
            Ok(b"TCP 0.0.0.0:1 0.0.0.0:0 LISTENING 1\n".to_vec())
        }
    }

    #[test]
    fn test_stage_reported_per_call() {
        let lookup = CountingLookup {
            refreshes: Arc::new(AtomicUsize::new(0)),
        };
        let source = FlakySource {
            failed_once: AtomicBool::new(false),
        };
        let mut snap = Snapshotter::new(Box::new(source), Box::new(lookup));

        let (stage, result) = snap.snapshot_staged(Protocol::Tcp);
        assert_eq!(stage, Stage::Failed);
        assert!(matches!(result, Err(NetsnapError::Command(_))));

        let (stage, result) = snap.snapshot_staged(Protocol::Tcp);
        assert_eq!(stage, Stage::Done);
        assert_eq!(result.unwrap().len(), 1);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Correlating.to_string(), "correlating");
    }
}
