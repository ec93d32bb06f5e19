use crate::env::{
    AWS_PREFIX, RANCHER_AGENT_OPERATINGSYSTEM, RANCHER_SERVER_MISSING_OK,
    RANCHER_SERVER_OPERATINGSYSTEM,
};
use crate::error::{Error, Result};
use crate::machine::{machine_name, MachineRole};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORAGE_PATH: &str = "/workdir/.docker/machine";

/// A set variable is present even when its value is not valid UTF-8.
fn process_var(name: &str) -> Option<String> {
    std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
}

/// Everything a deprovisioning run needs, read once from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub role: MachineRole,
    pub aws_prefix: Option<String>,
    pub operating_system: String,
    pub missing_ok: bool,
    pub storage_path: PathBuf,
}

impl Config {
    pub fn server_from_env(storage_path: &Path) -> Result<Self> {
        Self::from_lookup(MachineRole::Server, storage_path, process_var)
    }

    pub fn agents_from_env(storage_path: &Path) -> Result<Self> {
        Self::from_lookup(MachineRole::AgentServer, storage_path, process_var)
    }

    /// Build a config for `role` from an arbitrary variable lookup
    pub fn from_lookup<F>(role: MachineRole, storage_path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let os_var = match role {
            MachineRole::Server => RANCHER_SERVER_OPERATINGSYSTEM,
            MachineRole::AgentServer => RANCHER_AGENT_OPERATINGSYSTEM,
        };
        let operating_system =
            lookup(os_var).ok_or_else(|| Error::MissingEnvVars(vec![os_var.to_string()]))?;

        Ok(Self {
            role,
            aws_prefix: lookup(AWS_PREFIX).filter(|p| !p.is_empty()),
            operating_system,
            missing_ok: lookup(RANCHER_SERVER_MISSING_OK).is_some(),
            storage_path: storage_path.to_path_buf(),
        })
    }

    pub fn machine_name(&self) -> String {
        machine_name(self.role, &self.operating_system, self.aws_prefix.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_server_config_from_lookup() {
        let config = Config::from_lookup(
            MachineRole::Server,
            Path::new(DEFAULT_STORAGE_PATH),
            lookup_from(&[
                ("AWS_PREFIX", "acme"),
                ("RANCHER_SERVER_OPERATINGSYSTEM", "ubuntu"),
                ("RANCHER_SERVER_MISSING_OK", ""),
            ]),
        )
        .unwrap();

        assert_eq!(config.aws_prefix.as_deref(), Some("acme"));
        assert_eq!(config.operating_system, "ubuntu");
        assert!(config.missing_ok);
        assert_eq!(config.machine_name(), "acme-ubuntu-vtest-server0");
    }

    #[test]
    fn test_agents_config_uses_agent_os_var() {
        let config = Config::from_lookup(
            MachineRole::AgentServer,
            Path::new(DEFAULT_STORAGE_PATH),
            lookup_from(&[
                ("RANCHER_SERVER_OPERATINGSYSTEM", "centos"),
                ("RANCHER_AGENT_OPERATINGSYSTEM", "ubuntu"),
            ]),
        )
        .unwrap();

        assert_eq!(config.operating_system, "ubuntu");
        assert!(!config.missing_ok);
        assert_eq!(config.machine_name(), "ubuntu-validation-tests-server0");
    }

    #[test]
    fn test_empty_prefix_is_absent() {
        let config = Config::from_lookup(
            MachineRole::Server,
            Path::new(DEFAULT_STORAGE_PATH),
            lookup_from(&[("AWS_PREFIX", ""), ("RANCHER_SERVER_OPERATINGSYSTEM", "ubuntu")]),
        )
        .unwrap();
        assert_eq!(config.aws_prefix, None);
        assert_eq!(config.machine_name(), "ubuntu-vtest-server0");
    }

    #[test]
    fn test_missing_os_var_is_an_error() {
        let err = Config::from_lookup(
            MachineRole::Server,
            Path::new(DEFAULT_STORAGE_PATH),
            lookup_from(&[("RANCHER_AGENT_OPERATINGSYSTEM", "ubuntu")]),
        )
        .unwrap_err();
        match err {
            Error::MissingEnvVars(names) => {
                assert_eq!(names, vec!["RANCHER_SERVER_OPERATINGSYSTEM"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_process_var_keeps_non_utf8_values() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = "RANCHER_DEPROVISION_TEST_NON_UTF8";
        std::env::set_var(name, OsStr::from_bytes(b"ubu\xffntu"));

        assert!(crate::env::missing_from_process(&[name]).is_empty());
        assert_eq!(process_var(name).as_deref(), Some("ubu\u{fffd}ntu"));
        std::env::remove_var(name);
    }

    #[test]
    fn test_process_var_absent() {
        let name = "RANCHER_DEPROVISION_TEST_CONFIG_UNSET";
        std::env::remove_var(name);
        assert_eq!(process_var(name), None);
    }

    #[test]
    fn test_config_serializes_for_debug_dump() {
        let config = Config::from_lookup(
            MachineRole::Server,
            Path::new("/tmp/machines"),
            lookup_from(&[("RANCHER_SERVER_OPERATINGSYSTEM", "ubuntu")]),
        )
        .unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["role"], "server");
        assert_eq!(json["storage_path"], "/tmp/machines");
    }
}
