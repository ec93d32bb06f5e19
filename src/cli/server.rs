use crate::config::Config;
use crate::deprovision::deprovision_server;
use crate::runner::{CommandRunner, SystemRunner};
use crate::Result;
use std::path::Path;

pub fn run(storage_path: &Path) -> Result<()> {
    run_with(storage_path, &SystemRunner)
}

pub fn run_with<R: CommandRunner>(storage_path: &Path, runner: &R) -> Result<()> {
    let config = Config::server_from_env(storage_path)?;
    tracing::debug!("Config: {}", serde_json::to_string(&config)?);

    deprovision_server(&config, runner)?;

    println!("Deprovisioned rancher/server {}", config.machine_name());
    Ok(())
}
