pub mod client;
pub mod error;

pub use client::{OrchestratorApi, OrchestratorClient};
pub use error::ClientError;
