use std::fmt;

use serde::{Deserialize, Serialize};

/// The four fixed stages a simulated feature job walks through.
///
/// Declaration order is execution order: architect → backend → integration → review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Architect,
    Backend,
    Integration,
    Review,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Architect,
        Stage::Backend,
        Stage::Integration,
        Stage::Review,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Architect => write!(f, "architect"),
            Stage::Backend => write!(f, "backend"),
            Stage::Integration => write!(f, "integration"),
            Stage::Review => write!(f, "review"),
        }
    }
}

/// Progress of a single stage. Ordered so that a stage can only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageState {
    Pending,
    Running,
    Complete,
}

impl fmt::Display for StageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageState::Pending => write!(f, "pending"),
            StageState::Running => write!(f, "running"),
            StageState::Complete => write!(f, "complete"),
        }
    }
}

/// State of every stage at one instant. All four keys are always serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Steps {
    pub architect: StageState,
    pub backend: StageState,
    pub integration: StageState,
    pub review: StageState,
}

impl Steps {
    pub fn get(&self, stage: Stage) -> StageState {
        match stage {
            Stage::Architect => self.architect,
            Stage::Backend => self.backend,
            Stage::Integration => self.integration,
            Stage::Review => self.review,
        }
    }

    /// Iterates stages in execution order together with their state.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, StageState)> + '_ {
        Stage::ALL.into_iter().map(|stage| (stage, self.get(stage)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_state_ordering_is_forward_only() {
        assert!(StageState::Pending < StageState::Running);
        assert!(StageState::Running < StageState::Complete);
    }

    #[test]
    fn steps_serialize_with_all_four_keys() {
        let steps = Steps {
            architect: StageState::Complete,
            backend: StageState::Running,
            integration: StageState::Pending,
            review: StageState::Pending,
        };
        let json = serde_json::to_value(steps).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "architect": "complete",
                "backend": "running",
                "integration": "pending",
                "review": "pending",
            })
        );
    }

    #[test]
    fn steps_iter_follows_execution_order() {
        let steps = Steps {
            architect: StageState::Complete,
            backend: StageState::Complete,
            integration: StageState::Running,
            review: StageState::Pending,
        };
        let order: Vec<Stage> = steps.iter().map(|(stage, _)| stage).collect();
        assert_eq!(order, Stage::ALL.to_vec());
        assert_eq!(steps.get(Stage::Integration), StageState::Running);
    }

    #[test]
    fn stage_display() {
        assert_eq!(Stage::Architect.to_string(), "architect");
        assert_eq!(Stage::Review.to_string(), "review");
        assert_eq!(StageState::Running.to_string(), "running");
    }
}
