use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::stage::{Stage, StageState, Steps};

/// Elapsed time at which the architect stage completes.
pub const ARCHITECT_DONE: Duration = Duration::from_secs(2);
/// Elapsed time at which the backend stage completes.
pub const BACKEND_DONE: Duration = Duration::from_secs(4);
/// Elapsed time at which integration completes and the job becomes terminal.
pub const INTEGRATION_DONE: Duration = Duration::from_secs(6);

/// The phases of a simulated job, driven by one shared clock.
///
/// Each job flows through: ARCHITECT → BACKEND → INTEGRATION → COMPLETE.
/// The review stage never runs on its own; it completes together with the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    Architect,
    Backend,
    Integration,
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Architect => write!(f, "ARCHITECT"),
            Phase::Backend => write!(f, "BACKEND"),
            Phase::Integration => write!(f, "INTEGRATION"),
            Phase::Complete => write!(f, "COMPLETE"),
        }
    }
}

impl Phase {
    /// Map elapsed time since job creation to a phase.
    ///
    /// Thresholds are exclusive upper bounds checked in order, so an elapsed
    /// value exactly on a threshold belongs to the later phase.
    pub fn from_elapsed(elapsed: Duration) -> Self {
        if elapsed < ARCHITECT_DONE {
            Phase::Architect
        } else if elapsed < BACKEND_DONE {
            Phase::Backend
        } else if elapsed < INTEGRATION_DONE {
            Phase::Integration
        } else {
            Phase::Complete
        }
    }

    /// The stage currently running, or `None` once the job is terminal.
    pub fn active_stage(self) -> Option<Stage> {
        match self {
            Phase::Architect => Some(Stage::Architect),
            Phase::Backend => Some(Stage::Backend),
            Phase::Integration => Some(Stage::Integration),
            Phase::Complete => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Complete
    }

    /// Derive one stage's state: stages before the active one are complete,
    /// the active one is running, the rest are pending.
    pub fn stage_state(self, stage: Stage) -> StageState {
        match self.active_stage() {
            None => StageState::Complete,
            Some(active) if stage < active => StageState::Complete,
            Some(active) if stage == active => StageState::Running,
            Some(_) => StageState::Pending,
        }
    }

    pub fn steps(self) -> Steps {
        Steps {
            architect: self.stage_state(Stage::Architect),
            backend: self.stage_state(Stage::Backend),
            integration: self.stage_state(Stage::Integration),
            review: self.stage_state(Stage::Review),
        }
    }

    /// Recover the phase from a set of stage states.
    pub fn from_steps(steps: &Steps) -> Self {
        if steps.review == StageState::Complete {
            Phase::Complete
        } else if steps.backend == StageState::Complete {
            Phase::Integration
        } else if steps.architect == StageState::Complete {
            Phase::Backend
        } else {
            Phase::Architect
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn phases_follow_thresholds() {
        assert_eq!(Phase::from_elapsed(Duration::ZERO), Phase::Architect);
        assert_eq!(Phase::from_elapsed(ms(1_999)), Phase::Architect);
        assert_eq!(Phase::from_elapsed(ms(3_500)), Phase::Backend);
        assert_eq!(Phase::from_elapsed(ms(5_000)), Phase::Integration);
        assert_eq!(Phase::from_elapsed(Duration::from_secs(3_600)), Phase::Complete);
    }

    #[test]
    fn boundary_belongs_to_later_phase() {
        assert_eq!(Phase::from_elapsed(ARCHITECT_DONE), Phase::Backend);
        assert_eq!(Phase::from_elapsed(BACKEND_DONE), Phase::Integration);
        assert_eq!(Phase::from_elapsed(INTEGRATION_DONE), Phase::Complete);

        assert_eq!(
            Phase::from_elapsed(ARCHITECT_DONE - Duration::from_nanos(1)),
            Phase::Architect
        );
        assert_eq!(
            Phase::from_elapsed(INTEGRATION_DONE - Duration::from_nanos(1)),
            Phase::Integration
        );
    }

    #[test]
    fn stage_states_per_phase() {
        let s = Phase::Architect.steps();
        assert_eq!(
            [s.architect, s.backend, s.integration, s.review],
            [StageState::Running, StageState::Pending, StageState::Pending, StageState::Pending]
        );

        let s = Phase::Backend.steps();
        assert_eq!(
            [s.architect, s.backend, s.integration, s.review],
            [StageState::Complete, StageState::Running, StageState::Pending, StageState::Pending]
        );

        let s = Phase::Integration.steps();
        assert_eq!(
            [s.architect, s.backend, s.integration, s.review],
            [StageState::Complete, StageState::Complete, StageState::Running, StageState::Pending]
        );

        let s = Phase::Complete.steps();
        assert!(s.iter().all(|(_, state)| state == StageState::Complete));
    }

    #[test]
    fn stage_states_never_regress() {
        let mut previous = Phase::from_elapsed(Duration::ZERO).steps();
        for millis in (0..=7_000).step_by(50) {
            let current = Phase::from_elapsed(ms(millis)).steps();
            for stage in Stage::ALL {
                assert!(
                    current.get(stage) >= previous.get(stage),
                    "{stage} regressed at {millis}ms"
                );
            }
            previous = current;
        }
    }

    #[test]
    fn from_steps_inverts_steps() {
        for phase in [Phase::Architect, Phase::Backend, Phase::Integration, Phase::Complete] {
            assert_eq!(Phase::from_steps(&phase.steps()), phase);
        }
    }

    #[test]
    fn only_complete_is_terminal() {
        assert!(Phase::Complete.is_terminal());
        assert!(!Phase::Integration.is_terminal());
        assert_eq!(Phase::Complete.active_stage(), None);
    }

    #[test]
    fn phase_display() {
        assert_eq!(Phase::Architect.to_string(), "ARCHITECT");
        assert_eq!(Phase::Backend.to_string(), "BACKEND");
        assert_eq!(Phase::Integration.to_string(), "INTEGRATION");
        assert_eq!(Phase::Complete.to_string(), "COMPLETE");
    }
}
