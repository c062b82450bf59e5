use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetsnapError {
    #[error("Malformed endpoint: {0:?}")]
    Endpoint(String),
    #[error("Invalid PID: {0:?}")]
    InvalidPid(String),
    #[error("Process lookup failed for PID {pid}: {reason}")]
    ProcessLookup { pid: u32, reason: String },
    #[error("Command error: {0}")]
    Command(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetsnapError>;
