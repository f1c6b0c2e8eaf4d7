pub mod executor;
pub mod orchestrator;
pub mod types;
