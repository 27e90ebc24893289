//! Installation across assistants.

pub mod orchestrator;

pub use orchestrator::{InstallOrchestrator, InstallReport};
