/// Shell execution for adb and scrcpy commands
///
/// Every command runs through `/bin/sh -c` so canned pipelines (`| grep`,
/// `> file.png`) work as written. Output handling follows one policy:
/// stdout wins, unexpected stderr is fatal, and a silent failure is a
/// recoverable error unless the caller tolerates it.
use crate::tools::errors::ExecError;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Classifies stderr text as expected for a particular command
pub type StderrFilter = fn(&str) -> bool;

/// How a command's stderr and exit status are treated
#[derive(Clone, Copy, Default)]
pub struct ErrorPolicy {
    /// Any stderr or failed exit status is acceptable
    pub tolerate: bool,
    /// Stderr this filter accepts is never fatal
    pub expected: Option<StderrFilter>,
}

impl ErrorPolicy {
    pub const STRICT: Self = Self {
        tolerate: false,
        expected: None,
    };

    pub const TOLERANT: Self = Self {
        tolerate: true,
        expected: None,
    };

    pub fn expecting(self, filter: StderrFilter) -> Self {
        Self {
            expected: Some(filter),
            ..self
        }
    }

    fn accepts_stderr(&self, stderr: &str) -> bool {
        self.tolerate || self.expected.is_some_and(|filter| filter(stderr))
    }
}

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
}

impl RawOutput {
    fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }

    fn status_text(&self) -> String {
        match self.exit_code {
            Some(code) => format!("exit code {}", code),
            None => "a signal".to_string(),
        }
    }
}

impl From<std::process::Output> for RawOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        }
    }
}

/// Turn a finished command into its text result
pub fn apply_policy(command: &str, raw: RawOutput, policy: ErrorPolicy) -> Result<String, ExecError> {
    if !raw.stdout.is_empty() {
        return Ok(raw.stdout);
    }

    if !raw.stderr.is_empty() && !policy.accepts_stderr(&raw.stderr) {
        return Err(ExecError::Fatal(raw.stderr));
    }

    if !raw.succeeded() && !policy.tolerate {
        return Err(ExecError::Failed {
            command: command.to_string(),
            status: raw.status_text(),
        });
    }

    Ok(raw.stderr)
}

/// Runs shell commands on the host
#[allow(async_fn_in_trait)]
pub trait Shell {
    async fn exec(&self, command: &str, policy: ErrorPolicy) -> Result<String, ExecError>;

    /// Run with the strict policy
    async fn run(&self, command: &str) -> Result<String, ExecError> {
        self.exec(command, ErrorPolicy::STRICT).await
    }
}

/// Production shell that spawns `/bin/sh -c`
#[derive(Debug, Clone, Default)]
pub struct AdbShell {
    serial: Option<String>,
}

impl AdbShell {
    /// `serial` is exported as `ANDROID_SERIAL` so adb targets one device
    pub fn new(serial: Option<String>) -> Self {
        Self { serial }
    }
}

impl Shell for AdbShell {
    async fn exec(&self, command: &str, policy: ErrorPolicy) -> Result<String, ExecError> {
        debug!(command, tolerate = policy.tolerate, "running shell command");

        let mut child = Command::new("/bin/sh");
        child.arg("-c").arg(command).stdin(Stdio::null());
        if let Some(serial) = &self.serial {
            child.env("ANDROID_SERIAL", serial);
        }

        let output = match child.output().await {
            Ok(output) => RawOutput::from(output),
            Err(e) if policy.tolerate => {
                debug!(error = %e, "spawn failed, tolerated");
                return Ok(String::new());
            }
            Err(e) => return Err(ExecError::Spawn(e)),
        };

        if !output.stderr.is_empty() {
            debug!(stderr = %output.stderr.trim_end(), "command wrote to stderr");
        }

        apply_policy(command, output, policy)
    }
}
