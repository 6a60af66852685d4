/// Error types for rabbit operations
///
/// Shell execution failures are split into a fatal variant, raised when a
/// command writes unexpected output to stderr, and recoverable variants that
/// strategies may report and move past.
use thiserror::Error;

/// Errors produced by the shell executor
#[derive(Error, Debug)]
pub enum ExecError {
    /// The command wrote to stderr and the caller did not expect it.
    /// The top-level caller prints the text and exits with status 1.
    #[error("{0}")]
    Fatal(String),

    /// The command produced no output and exited unsuccessfully
    #[error("command exited with {status}")]
    Failed { command: String, status: String },

    /// The shell itself could not be started
    #[error("failed to spawn shell: {0}")]
    Spawn(#[from] std::io::Error),
}

impl ExecError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ExecError::Fatal(_))
    }
}

/// Find the stderr text of a fatal executor error anywhere in the chain
pub fn fatal_message(err: &anyhow::Error) -> Option<&str> {
    err.chain().find_map(|cause| match cause.downcast_ref::<ExecError>() {
        Some(ExecError::Fatal(stderr)) => Some(stderr.as_str()),
        _ => None,
    })
}

pub fn is_fatal(err: &anyhow::Error) -> bool {
    fatal_message(err).is_some()
}
