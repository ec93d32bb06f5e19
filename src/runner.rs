use crate::error::{Error, Result};
use std::process::Command;

/// Captured streams of a command that exited successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs one external command to completion.
///
/// A non-zero exit becomes [`Error::CommandFailed`] carrying the exit code
/// and captured stderr. Failing to spawn at all is [`Error::Io`].
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String], envs: &[(String, String)])
        -> Result<CommandOutput>;
}

/// Space-joined command line, used for echoing and error messages.
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spawns real processes, blocking until each exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        envs: &[(String, String)],
    ) -> Result<CommandOutput> {
        let command = command_line(program, args);
        tracing::info!("{command}");

        let output = Command::new(program)
            .args(args)
            .envs(envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        tracing::debug!(code = ?output.status.code(), %stdout, %stderr, "{command} finished");

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command,
                code: output.status.code(),
                stderr,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}
