use thiserror::Error;

/// Substring docker-machine prints on stderr when the named machine is gone.
pub const HOST_DOES_NOT_EXIST: &str = "Host does not exist";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to find required environment variables! : {}", .0.join(", "))]
    MissingEnvVars(Vec<String>),

    #[error("Command failed: {command}, exit code: {code:?}, stderr: {stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Invalid docker-machine state for {machine}: {output:?}")]
    UnknownMachineState { machine: String, output: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when an external command failed because the target host is already absent.
    pub fn is_host_missing(&self) -> bool {
        match self {
            Error::CommandFailed { stderr, .. } => stderr.contains(HOST_DOES_NOT_EXIST),
            _ => false,
        }
    }

    /// Exit code and stderr of a failed command, rendered the way failures are logged.
    pub fn failure_detail(&self) -> String {
        match self {
            Error::CommandFailed { code, stderr, .. } => {
                let code = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
                format!("{code} :: {}", stderr.trim_end())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
