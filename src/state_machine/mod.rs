mod job;
mod phase;
mod stage;

pub use job::{Job, JobId};
pub use phase::Phase;
pub use stage::{StageState, Steps};
