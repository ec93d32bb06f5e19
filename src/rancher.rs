use crate::env::RANCHER_URL;
use crate::error::Result;
use crate::runner::CommandRunner;

const RANCHER: &str = "rancher";

/// `http://<address>:8080/v1/schemas`
pub fn rancher_url(server_address: &str) -> String {
    format!("http://{server_address}:8080/v1/schemas")
}

/// The `rancher` CLI, pointed at one server through `RANCHER_URL`.
pub struct RancherCli<'a, R: CommandRunner> {
    runner: &'a R,
    url: String,
}

impl<'a, R: CommandRunner> RancherCli<'a, R> {
    pub fn new(runner: &'a R, url: String) -> Self {
        Self { runner, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn run_rancher(&self, args: &[&str]) -> Result<String> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let envs = [(RANCHER_URL.to_string(), self.url.clone())];
        Ok(self.runner.run(RANCHER, &args, &envs)?.stdout)
    }

    /// Registered host ids, one per line of `host ls -q`, in listing order
    pub fn host_ids(&self) -> Result<Vec<String>> {
        let stdout = self.run_rancher(&["host", "ls", "-q"])?;
        Ok(stdout.split_whitespace().map(str::to_string).collect())
    }

    /// Stop and remove a host, blocking until rancher reports it gone.
    pub fn remove_host(&self, id: &str) -> Result<()> {
        self.run_rancher(&["--wait", "rm", "-s", id]).map(|_| ())
    }
}
