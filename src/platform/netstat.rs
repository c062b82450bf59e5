use std::process::Command;

use log::debug;

use super::{NetstatSource, SourceConfig};
use crate::error::{NetsnapError, Result};
use crate::model::Protocol;

/// Runs `netstat -ano -p <selector>` and returns its stdout.
pub struct NetstatCommand {
    config: SourceConfig,
}

impl NetstatCommand {
    pub fn new(config: SourceConfig) -> Self {
        NetstatCommand { config }
    }

    fn command(&self, protocol: Protocol) -> Command {
        let mut cmd = if self.config.shell {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", &self.config.program]);
            cmd
        } else {
            Command::new(&self.config.program)
        };
        cmd.args(["-ano", "-p", protocol.selector()]);
        cmd
    }
}

impl NetstatSource for NetstatCommand {
    fn fetch(&self, protocol: Protocol) -> Result<Vec<u8>> {
        let mut cmd = self.command(protocol);
        debug!("running {:?}", cmd);

        let output = cmd.output().map_err(|e| {
            NetsnapError::Command(format!("failed to run {}: {}", self.config.program, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NetsnapError::Command(format!(
                "{} exited with {}: {}",
                self.config.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}
