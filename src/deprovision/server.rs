use crate::config::Config;
use crate::docker_machine::DockerMachine;
use crate::error::Result;
use crate::runner::CommandRunner;

/// Remove the rancher/server machine.
///
/// A host that is already gone counts as removed only when `missing_ok` is set.
/// Every other failure is returned as-is.
pub fn deprovision_server<R: CommandRunner>(config: &Config, runner: &R) -> Result<()> {
    let machine = config.machine_name();
    let docker_machine = DockerMachine::new(runner, &config.storage_path);

    match docker_machine.remove(&machine) {
        Ok(()) => {
            tracing::info!("Removed rancher/server node '{machine}'");
            Ok(())
        }
        Err(e) if config.missing_ok && e.is_host_missing() => {
            tracing::debug!(
                "Did not find a node for hosting rancher/server at '{machine}'...assuming that is ok."
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "Failed while removing rancher/server node '{machine}': {}",
                e.failure_detail()
            );
            Err(e)
        }
    }
}
