//! Status simulation: a pure mapping from elapsed time to the payload a
//! client sees when polling a job.
//!
//! All generated output is canned. The architecture appears once the
//! integration phase starts; files and review text only in the terminal phase.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::state_machine::{Phase, Steps};

/// Review text attached to every finished job.
pub const REVIEW_NOTE: &str = "Looks good. Add validations later.";

/// Overall job status as reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Running,
    Complete,
}

/// A generated data model description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataModel {
    pub name: String,
    /// Field name to type name.
    pub fields: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Architecture {
    pub feature: String,
    pub model: DataModel,
}

impl Architecture {
    /// The fixed "Products" architecture every job produces.
    pub fn products() -> Self {
        let fields = [("id", "int"), ("name", "string"), ("price", "decimal")]
            .into_iter()
            .map(|(name, ty)| (name.to_string(), ty.to_string()))
            .collect();
        Self {
            feature: "Products".to_string(),
            model: DataModel {
                name: "Product".to_string(),
                fields,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

impl GeneratedFile {
    fn new(path: &str, content: &str) -> Self {
        Self {
            path: path.to_string(),
            content: content.to_string(),
        }
    }

    /// The two placeholder files every finished job produces, in order.
    pub fn placeholders() -> Vec<Self> {
        vec![
            Self::new("ProductController.cs", "// controller code..."),
            Self::new("ProductModel.cs", "// model code..."),
        ]
    }
}

/// Response body of `GET /status/{jobId}`.
///
/// Fields not yet reached serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub status: RunStatus,
    pub steps: Steps,
    pub architecture: Option<Architecture>,
    pub files: Option<Vec<GeneratedFile>>,
    pub review: Option<String>,
}

impl StatusPayload {
    pub fn for_phase(phase: Phase) -> Self {
        let status = if phase.is_terminal() {
            RunStatus::Complete
        } else {
            RunStatus::Running
        };
        let architecture = (phase >= Phase::Integration).then(Architecture::products);
        let files = phase.is_terminal().then(GeneratedFile::placeholders);
        let review = phase.is_terminal().then(|| REVIEW_NOTE.to_string());

        Self {
            status,
            steps: phase.steps(),
            architecture,
            files,
            review,
        }
    }

    pub fn phase(&self) -> Phase {
        Phase::from_steps(&self.steps)
    }

    pub fn is_complete(&self) -> bool {
        self.status == RunStatus::Complete
    }
}

/// Compute the status a job shows after `elapsed` time. Deterministic and side-effect free.
pub fn compute_status(elapsed: Duration) -> StatusPayload {
    StatusPayload::for_phase(Phase::from_elapsed(elapsed))
}
