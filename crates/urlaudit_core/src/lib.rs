//! urlaudit core: pure data model, batching and result formatting.
mod format;
mod item;
mod mode;
mod partition;
mod redirect;

pub use format::{
    full_target, outcome_text, redirect_line, report_lines, status_line, FAILED_STATUS,
};
pub use item::{Outcome, Probe, WorkItem};
pub use mode::{Mode, NonRedirectPolicy};
pub use partition::{chunk_count, partition};
pub use redirect::{is_redirect, resolve_location};
