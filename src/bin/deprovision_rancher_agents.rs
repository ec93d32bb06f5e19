use anyhow::Context;
use clap::Parser;
use rancher_deprovision::config::DEFAULT_STORAGE_PATH;
use rancher_deprovision::{cli, env, logging};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "deprovision-rancher-agents",
    version,
    about = "Remove every host registered with the validation-test rancher/server"
)]
struct Args {
    /// docker-machine storage path
    #[arg(long, default_value = DEFAULT_STORAGE_PATH)]
    storage_path: PathBuf,
}

fn run(args: &Args) -> anyhow::Result<()> {
    cli::dump_environment()?;
    env::require(env::AGENTS_REQUIRED)?;

    cli::agents::run(&args.storage_path).context("Failed while deprovisioning Rancher Agents!")
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(env::debug_enabled());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logging::log_err(&format!("{e:#}"));
            ExitCode::from(cli::FAILURE_EXIT_CODE)
        }
    }
}
