use crate::config::Config;
use crate::docker_machine::DockerMachine;
use crate::error::{Error, Result};
use crate::machine::MachineStatus;
use crate::rancher::{rancher_url, RancherCli};
use crate::runner::CommandRunner;

/// What an agent teardown observed and did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentReport {
    pub rancher_url: Option<String>,
    pub status: Option<MachineStatus>,
    /// The server host itself was gone and `missing_ok` excused it
    pub server_missing: bool,
    pub removed: Vec<String>,
    /// Hosts whose removal failed only because they no longer exist
    pub already_gone: Vec<String>,
    pub failed: Vec<String>,
}

impl AgentReport {
    pub fn skipped(&self) -> bool {
        self.status == Some(MachineStatus::Stopped)
    }
}

/// Remove every host registered with the rancher/server.
///
/// Command failures are logged and swallowed. The only error returned is a
/// server status docker-machine should never report.
pub fn deprovision_agents<R: CommandRunner>(config: &Config, runner: &R) -> Result<AgentReport> {
    let machine = config.machine_name();
    let docker_machine = DockerMachine::new(runner, &config.storage_path);
    let mut report = AgentReport::default();

    let address = match docker_machine.ip(&machine) {
        Ok(address) => address,
        Err(e) => {
            report.server_missing = log_failure(config, &machine, &e);
            return Ok(report);
        }
    };

    let url = rancher_url(&address);
    tracing::debug!("RANCHER_URL={url}");
    report.rancher_url = Some(url.clone());

    let status = docker_machine.status(&machine)?;
    report.status = Some(status);

    if status == MachineStatus::Stopped {
        tracing::warn!(
            "rancher/server host node '{machine}' detected as present but 'stopped'. \
             Skipping Agent deprovisioning. This may require manual cleanup."
        );
        return Ok(report);
    }

    let rancher = RancherCli::new(runner, url);
    let hosts = match rancher.host_ids() {
        Ok(hosts) => hosts,
        Err(e) => {
            log_failure(config, &machine, &e);
            return Ok(report);
        }
    };
    tracing::info!("Removing {} rancher host(s) from {}", hosts.len(), rancher.url());

    for host in hosts {
        match rancher.remove_host(&host) {
            Ok(()) => report.removed.push(host),
            Err(e) => {
                if log_failure(config, &machine, &e) {
                    report.already_gone.push(host);
                } else {
                    report.failed.push(host);
                }
            }
        }
    }

    Ok(report)
}

/// Log a swallowed failure. Returns true when `missing_ok` excuses it.
fn log_failure(config: &Config, machine: &str, err: &Error) -> bool {
    if config.missing_ok && err.is_host_missing() {
        tracing::debug!(
            "Did not find a node for hosting rancher/server at '{machine}'...assuming that is ok."
        );
        return true;
    }
    tracing::error!(
        "Failed while deprovisioning Rancher Agents!: {}",
        err.failure_detail()
    );
    tracing::error!("Not going to let that stop us! 'Damn the torpedos!'");
    false
}
