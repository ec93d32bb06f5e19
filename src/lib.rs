pub mod cli;
pub mod config;
pub mod deprovision;
pub mod docker_machine;
pub mod env;
pub mod error;
pub mod logging;
pub mod machine;
pub mod rancher;
pub mod runner;

pub use config::Config;
pub use error::{Error, Result};
pub use machine::{MachineRole, MachineStatus};
pub use runner::{CommandRunner, SystemRunner};
