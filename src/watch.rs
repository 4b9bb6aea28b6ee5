use std::time::Duration;

use anyhow::{Result, bail};
use tokio::time::sleep;

use crate::api::OrchestratorApi;
use crate::config::MockConfig;
use crate::simulator::StatusPayload;
use crate::state_machine::{JobId, Phase};

/// Drives a job on a mock orchestrator from submission to completion by polling.
pub struct JobWatcher {
    /// Delay between two status polls.
    pub poll_interval: Duration,
    /// Polls allowed before giving up on the job.
    pub max_polls: u32,
}

impl Default for JobWatcher {
    fn default() -> Self {
        Self::from_config(&MockConfig::default())
    }
}

/// Summary of a watched job.
#[derive(Debug, Clone)]
pub struct WatchReport {
    pub job_id: JobId,
    pub polls: u32,
    /// Phases observed, in order, without repeats.
    pub phases: Vec<Phase>,
    pub last: StatusPayload,
}

impl JobWatcher {
    pub fn new(poll_interval: Duration, max_polls: u32) -> Self {
        Self {
            poll_interval,
            max_polls,
        }
    }

    pub fn from_config(config: &MockConfig) -> Self {
        Self::new(Duration::from_millis(config.poll_interval_ms), config.max_polls)
    }

    /// Submit `description` and poll until the job reports `complete`.
    ///
    /// `on_update` sees every payload received, including the final one.
    pub async fn watch(
        &self,
        api: &impl OrchestratorApi,
        description: &str,
        mut on_update: impl FnMut(&StatusPayload),
    ) -> Result<WatchReport> {
        if description.trim().is_empty() {
            bail!("Feature description must not be empty");
        }

        let job_id = api.generate_feature(description).await?;
        let mut phases: Vec<Phase> = Vec::new();

        for poll in 1..=self.max_polls {
            let payload = api.status(&job_id).await?;
            on_update(&payload);

            let phase = payload.phase();
            if phases.last() != Some(&phase) {
                phases.push(phase);
            }

            if payload.is_complete() {
                return Ok(WatchReport {
                    job_id,
                    polls: poll,
                    phases,
                    last: payload,
                });
            }

            sleep(self.poll_interval).await;
        }

        bail!(
            "Job {job_id} did not complete after {} polls",
            self.max_polls
        );
    }
}
