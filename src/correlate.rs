use crate::error::{NetsnapError, Result};
use crate::model::UNKNOWN;
use crate::platform::ProcessLookup;

/// Suffix stripped from executable names to form the display name.
pub const EXE_SUFFIX: &str = ".exe";

/// Who owns a socket, as far as the process table can tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessIdentity {
    pub name: String,
    pub exe: String,
    pub user: Option<String>,
}

impl ProcessIdentity {
    fn unknown() -> Self {
        ProcessIdentity {
            name: UNKNOWN.to_string(),
            exe: UNKNOWN.to_string(),
            user: None,
        }
    }
}

/// Resolve the PID column of a row to a process identity.
///
/// A PID that is not a number, or a lookup failure, is an error. A process
/// that no longer exists (or has no executable name) resolves to
/// [`UNKNOWN`].
pub fn correlate(pid: &str, lookup: &dyn ProcessLookup) -> Result<ProcessIdentity> {
    let pid_num: u32 = pid
        .parse()
        .map_err(|_| NetsnapError::InvalidPid(pid.to_string()))?;

    let Some(handle) = lookup.find_process(pid_num)? else {
        return Ok(ProcessIdentity::unknown());
    };

    match handle.executable {
        Some(exe) if !exe.is_empty() => Ok(ProcessIdentity {
            name: process_name_from_executable(&exe).to_string(),
            exe,
            user: handle.user,
        }),
        _ => Ok(ProcessIdentity {
            user: handle.user,
            ..ProcessIdentity::unknown()
        }),
    }
}

/// `svchost.exe` -> `svchost`; names without the suffix are returned as is.
pub fn process_name_from_executable(exe: &str) -> &str {
    exe.strip_suffix(EXE_SUFFIX).unwrap_or(exe)
}
