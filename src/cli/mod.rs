pub mod agents;
pub mod server;

use crate::env;
use crate::Result;

/// Exit status for any failed run, `-1` as an unsigned byte.
pub const FAILURE_EXIT_CODE: u8 = 255;

/// Dump the whole process environment at debug level when `DEBUG` is set.
pub fn dump_environment() -> Result<()> {
    if env::debug_enabled() {
        tracing::debug!("Environment:\n{}", env::dump()?);
    }
    Ok(())
}
