/// What the process table knows about a PID.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessHandle {
    pub pid: u32,
    pub executable: Option<String>,
    pub user: Option<String>,
}
