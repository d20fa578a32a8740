use crate::cli::Cli;
use crate::prober::{HttpProbe, Probe, check_targets};
use crate::report::{EmptyListPolicy, Verdict};
use crate::targets::load_targets;
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

/// One pass over the server list: load, probe, classify.
pub struct Session {
    server_list: PathBuf,
    timeout: Duration,
    empty_list: EmptyListPolicy,
}

impl Session {
    pub fn new(cli: &Cli) -> Self {
        Self {
            server_list: cli.server_list.clone(),
            timeout: cli.timeout,
            empty_list: cli.empty_list_policy(),
        }
    }

    /// Builds the production HTTP probe and runs the check with it.
    pub async fn run(&self) -> Result<Verdict> {
        let probe = HttpProbe::new(self.timeout)?;
        tracing::debug!(timeout = ?self.timeout, "http probe ready");
        self.run_with(&probe).await
    }

    pub async fn run_with<P>(&self, probe: &P) -> Result<Verdict>
    where
        P: Probe + ?Sized,
    {
        let targets = load_targets(&self.server_list)?;
        tracing::info!(path = %self.server_list.display(), count = targets.len(), "loaded server list");
        if targets.is_empty() {
            tracing::warn!(policy = ?self.empty_list, "server list is empty");
        }

        let report = check_targets(probe, &targets).await;
        tracing::info!(total = report.total(), down = report.down_count(), "checks finished");

        Ok(report.verdict(self.empty_list))
    }
}
