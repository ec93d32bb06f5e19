use crate::error::{Error, Result};
use crate::machine::MachineStatus;
use crate::runner::{CommandOutput, CommandRunner};
use std::path::{Path, PathBuf};

const DOCKER_MACHINE: &str = "docker-machine";

/// Thin wrapper over the `docker-machine` CLI pinned to one storage path.
pub struct DockerMachine<'a, R: CommandRunner> {
    runner: &'a R,
    storage_path: PathBuf,
}

impl<'a, R: CommandRunner> DockerMachine<'a, R> {
    pub fn new(runner: &'a R, storage_path: &Path) -> Self {
        Self {
            runner,
            storage_path: storage_path.to_path_buf(),
        }
    }

    fn run_docker_machine(&self, args: &[&str]) -> Result<CommandOutput> {
        let mut full = vec![
            "--storage-path".to_string(),
            self.storage_path.display().to_string(),
        ];
        full.extend(args.iter().map(|a| a.to_string()));
        self.runner.run(DOCKER_MACHINE, &full, &[])
    }

    /// `rm -y <name>`
    pub fn remove(&self, name: &str) -> Result<()> {
        self.run_docker_machine(&["rm", "-y", name]).map(|_| ())
    }

    /// Address of the machine with trailing whitespace stripped
    pub fn ip(&self, name: &str) -> Result<String> {
        let output = self.run_docker_machine(&["ip", name])?;
        Ok(output.stdout.trim_end().to_string())
    }

    /// Query the machine state. A missing host is a status, not an error.
    pub fn status(&self, name: &str) -> Result<MachineStatus> {
        match self.run_docker_machine(&["status", name]) {
            Ok(output) => MachineStatus::from_output(name, &output.stdout),
            Err(Error::CommandFailed { stderr, .. }) => MachineStatus::from_failure(name, &stderr),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::fake::{FakeRunner, Reply};

    const DM: &str = "docker-machine --storage-path /workdir/.docker/machine";

    fn storage() -> &'static Path {
        Path::new("/workdir/.docker/machine")
    }

    #[test]
    fn test_remove_argument_shape() {
        let runner = FakeRunner::new().on(&format!("{DM} rm -y m0"), Reply::Ok(""));
        DockerMachine::new(&runner, storage()).remove("m0").unwrap();
        assert_eq!(runner.lines(), vec![format!("{DM} rm -y m0")]);
    }

    #[test]
    fn test_remove_propagates_failure() {
        let runner = FakeRunner::new().on(
            &format!("{DM} rm -y m0"),
            Reply::Fail(1, "Host does not exist: \"m0\""),
        );
        let err = DockerMachine::new(&runner, storage()).remove("m0").unwrap_err();
        assert!(err.is_host_missing());
    }

    #[test]
    fn test_ip_trims_trailing_newline() {
        let runner = FakeRunner::new().on(&format!("{DM} ip m0"), Reply::Ok("10.0.0.7\n"));
        let ip = DockerMachine::new(&runner, storage()).ip("m0").unwrap();
        assert_eq!(ip, "10.0.0.7");
    }

    #[test]
    fn test_status_running_and_stopped() {
        let runner = FakeRunner::new()
            .on(&format!("{DM} status m0"), Reply::Ok("Running\n"))
            .on(&format!("{DM} status m0"), Reply::Ok("Stopped\n"));
        let dm = DockerMachine::new(&runner, storage());
        assert_eq!(dm.status("m0").unwrap(), MachineStatus::Running);
        assert_eq!(dm.status("m0").unwrap(), MachineStatus::Stopped);
    }

    #[test]
    fn test_status_missing_host() {
        let runner = FakeRunner::new().on(
            &format!("{DM} status m0"),
            Reply::Fail(1, "Host does not exist: \"m0\""),
        );
        let status = DockerMachine::new(&runner, storage()).status("m0").unwrap();
        assert_eq!(status, MachineStatus::DoesNotExist);
    }

    #[test]
    fn test_status_other_failure_is_unknown_state() {
        let runner = FakeRunner::new().on(&format!("{DM} status m0"), Reply::Fail(1, "timeout"));
        let err = DockerMachine::new(&runner, storage()).status("m0").unwrap_err();
        assert!(matches!(err, Error::UnknownMachineState { .. }));
    }

    #[test]
    fn test_custom_storage_path() {
        let runner = FakeRunner::new().on(
            "docker-machine --storage-path /tmp/dm ip m0",
            Reply::Ok("1.2.3.4"),
        );
        let ip = DockerMachine::new(&runner, Path::new("/tmp/dm")).ip("m0").unwrap();
        assert_eq!(ip, "1.2.3.4");
    }
}
