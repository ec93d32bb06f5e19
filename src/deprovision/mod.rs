//! The two teardown procedures.
//!
//! They differ on purpose in how strictly they treat failures: removing the
//! server node fails the run on any error it cannot excuse, while removing
//! agent hosts only logs what went wrong and carries on.

mod agents;
mod server;

pub use agents::{deprovision_agents, AgentReport};
pub use server::deprovision_server;
