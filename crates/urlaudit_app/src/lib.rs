//! urlaudit application: CLI, CSV input, report output and run wiring.
pub mod cli;
pub mod input;
pub mod logging;
pub mod output;
mod run;

pub use run::{run, RunSummary};
