//! urlaudit engine: HTTP probing and concurrent batch dispatch.
mod dispatch;
mod probe;
mod progress;
mod types;

pub use dispatch::{dispatch, DispatchConfig, DEFAULT_BATCH_SIZE};
pub use probe::{ProbeSettings, Prober, ReqwestProber};
pub use progress::{DispatchProgress, LogProgressSink, ProgressSink};
pub use types::{DispatchError, FailureKind, ProbeError};
