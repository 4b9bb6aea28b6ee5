//! Process-wide record of created jobs.
//!
//! [`JobRegistry`] maps each [`JobId`] to its immutable [`Job`]. Entries are
//! inserted once and never updated or removed, so a concurrent map is all the
//! coordination needed.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use log::{debug, info, warn};

use crate::error::MockError;
use crate::state_machine::{Job, JobId};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub struct JobRegistry {
    jobs: DashMap<JobId, Job>,
    clock: Arc<dyn Clock>,
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            jobs: DashMap::new(),
            clock,
        }
    }

    /// Register a new job stamped with the current time and return its id.
    pub fn create_job(&self) -> JobId {
        let job = Job::new(self.clock.now());
        let id = job.id.clone();
        self.jobs.insert(id.clone(), job);
        info!("job {id} created ({} tracked)", self.jobs.len());
        id
    }

    /// Time elapsed since `job_id` was created.
    pub fn elapsed(&self, job_id: &str) -> Result<Duration, MockError> {
        let Some(job) = self.jobs.get(job_id) else {
            warn!("status requested for unknown job {job_id}");
            return Err(MockError::JobNotFound(job_id.to_string()));
        };
        let elapsed = job.elapsed_at(self.clock.now());
        debug!("job {job_id} elapsed {}ms", elapsed.as_millis());
        Ok(elapsed)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }
}

/// Clock that only moves when told to.
#[cfg(test)]
pub(crate) struct ManualClock {
    now: std::sync::Mutex<DateTime<Utc>>,
}

#[cfg(test)]
impl ManualClock {
    pub(crate) fn new() -> Self {
        Self {
            now: std::sync::Mutex::new(Utc::now()),
        }
    }

    pub(crate) fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += chrono::TimeDelta::from_std(by).unwrap();
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
