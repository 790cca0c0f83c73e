//! CLI layer - argument parsing, worker runner, and output formatting

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

pub use args::{Cli, Commands, ConfigAction, WorkerOptions};
