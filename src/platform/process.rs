use sysinfo::{Pid, System, Users};

use super::ProcessLookup;
use crate::error::Result;
use crate::model::ProcessHandle;

/// Process table backed by `sysinfo`.
pub struct SysinfoLookup {
    system: System,
    users: Users,
}

impl SysinfoLookup {
    pub fn new() -> Self {
        SysinfoLookup {
            system: System::new(),
            users: Users::new(),
        }
    }
}

impl Default for SysinfoLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLookup for SysinfoLookup {
    fn refresh(&mut self) -> Result<()> {
        self.system.refresh_processes();
        self.users.refresh_list();
        Ok(())
    }

    fn find_process(&self, pid: u32) -> Result<Option<ProcessHandle>> {
        let Some(process) = self.system.process(Pid::from_u32(pid)) else {
            return Ok(None);
        };

        let name = process.name();
        let executable = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
        let user = process
            .user_id()
            .and_then(|uid| self.users.get_user_by_id(uid))
            .map(|u| u.name().to_string());

        Ok(Some(ProcessHandle {
            pid,
            executable,
            user,
        }))
    }
}
