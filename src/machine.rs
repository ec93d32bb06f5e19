use crate::error::{Error, Result, HOST_DOES_NOT_EXIST};
use serde::Serialize;

/// Which rancher/server machine a tool targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineRole {
    /// The server node removed by the server deprovisioner
    Server,
    /// The server node the agent deprovisioner talks to
    AgentServer,
}

impl MachineRole {
    pub fn suffix(&self) -> &'static str {
        match self {
            MachineRole::Server => "vtest-server0",
            MachineRole::AgentServer => "validation-tests-server0",
        }
    }
}

impl std::fmt::Display for MachineRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineRole::Server => write!(f, "server"),
            MachineRole::AgentServer => write!(f, "agent-server"),
        }
    }
}

/// `{prefix-}{operating_system}-{suffix}`. An empty prefix counts as none.
pub fn machine_name(role: MachineRole, operating_system: &str, prefix: Option<&str>) -> String {
    let base = format!("{operating_system}-{}", role.suffix());
    match prefix {
        Some(p) if !p.is_empty() => format!("{p}-{base}"),
        _ => base,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineStatus {
    Stopped,
    Running,
    DoesNotExist,
}

impl std::fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineStatus::Stopped => write!(f, "Stopped"),
            MachineStatus::Running => write!(f, "Running"),
            MachineStatus::DoesNotExist => write!(f, "DNE"),
        }
    }
}

impl MachineStatus {
    /// Classify the stdout of a successful `docker-machine status`.
    /// "Stopped" wins when both words appear.
    pub fn from_output(machine: &str, stdout: &str) -> Result<Self> {
        if stdout.contains("Stopped") {
            return Ok(MachineStatus::Stopped);
        }
        if stdout.contains("Running") {
            return Ok(MachineStatus::Running);
        }
        Err(Error::UnknownMachineState {
            machine: machine.to_string(),
            output: stdout.to_string(),
        })
    }

    /// Classify a failed `docker-machine status` by its stderr.
    pub fn from_failure(machine: &str, stderr: &str) -> Result<Self> {
        if stderr.contains(HOST_DOES_NOT_EXIST) {
            return Ok(MachineStatus::DoesNotExist);
        }
        Err(Error::UnknownMachineState {
            machine: machine.to_string(),
            output: stderr.to_string(),
        })
    }
}
