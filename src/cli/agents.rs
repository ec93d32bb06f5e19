use crate::config::Config;
use crate::deprovision::deprovision_agents;
use crate::env::RANCHER_URL;
use crate::runner::{CommandRunner, SystemRunner};
use crate::Result;
use std::path::Path;

pub fn run(storage_path: &Path) -> Result<()> {
    run_with(storage_path, &SystemRunner)
}

pub fn run_with<R: CommandRunner>(storage_path: &Path, runner: &R) -> Result<()> {
    let config = Config::agents_from_env(storage_path)?;
    tracing::debug!("Config: {}", serde_json::to_string(&config)?);

    let report = deprovision_agents(&config, runner)?;

    // Later steps in the same process tree read this
    if let Some(url) = &report.rancher_url {
        std::env::set_var(RANCHER_URL, url);
    }

    if report.skipped() {
        println!("Skipped agent deprovisioning for {}", config.machine_name());
    } else {
        println!(
            "Removed {} rancher host(s), {} already gone, {} failed",
            report.removed.len(),
            report.already_gone.len(),
            report.failed.len()
        );
    }
    Ok(())
}
