use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::env;

pub const AWS_PREFIX: &str = "AWS_PREFIX";
pub const RANCHER_SERVER_OPERATINGSYSTEM: &str = "RANCHER_SERVER_OPERATINGSYSTEM";
pub const RANCHER_AGENT_OPERATINGSYSTEM: &str = "RANCHER_AGENT_OPERATINGSYSTEM";
pub const RANCHER_SERVER_MISSING_OK: &str = "RANCHER_SERVER_MISSING_OK";
pub const RANCHER_URL: &str = "RANCHER_URL";
pub const DEBUG: &str = "DEBUG";

pub const SERVER_REQUIRED: &[&str] = &[RANCHER_SERVER_OPERATINGSYSTEM];
pub const AGENTS_REQUIRED: &[&str] = &[RANCHER_AGENT_OPERATINGSYSTEM];

/// Returns the names in `required` that `is_set` reports as absent, in the same order.
pub fn missing_vars<'a, F>(required: &[&'a str], is_set: F) -> Vec<&'a str>
where
    F: Fn(&str) -> bool,
{
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|name| !is_set(*name))
        .collect();
    tracing::debug!("Missing envvars: {missing:?}");
    missing
}

pub fn missing_from_process<'a>(required: &[&'a str]) -> Vec<&'a str> {
    missing_vars(required, |name| env::var_os(name).is_some())
}

/// Fails with every missing name when any of `required` is unset in the process environment.
pub fn require(required: &[&str]) -> Result<()> {
    let missing = missing_from_process(required);
    if missing.is_empty() {
        return Ok(());
    }
    Err(Error::MissingEnvVars(
        missing.into_iter().map(str::to_string).collect(),
    ))
}

/// `DEBUG` toggles verbose logging when set to anything non-empty.
pub fn debug_enabled() -> bool {
    env::var_os(DEBUG).is_some_and(|v| !v.is_empty())
}

/// Snapshot of the process environment, sorted by name, as pretty JSON.
pub fn dump() -> Result<String> {
    let vars: BTreeMap<String, String> = env::vars_os()
        .map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        })
        .collect();
    Ok(serde_json::to_string_pretty(&vars)?)
}
