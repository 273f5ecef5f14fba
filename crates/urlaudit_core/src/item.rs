use crate::format::FAILED_STATUS;

/// One input record: a URL to request and, in redirect mode, the expected
/// suffix of its redirect target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// Position in the original input.
    pub index: usize,
    pub target: String,
    pub expectation: Option<String>,
}

impl WorkItem {
    pub fn new(index: usize, target: impl Into<String>, expectation: Option<String>) -> Self {
        Self {
            index,
            target: target.into(),
            expectation,
        }
    }

    pub fn expectation(&self) -> &str {
        self.expectation.as_deref().unwrap_or_default()
    }
}

/// Result for exactly one [`WorkItem`].
///
/// `text` is `None` when the item contributes no report line, which only
/// happens for non-redirect responses in redirect mode under
/// [`NonRedirectPolicy::Skip`](crate::NonRedirectPolicy::Skip).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub index: usize,
    pub status: i32,
    pub text: Option<String>,
}

impl Outcome {
    pub fn is_transport_failure(&self) -> bool {
        self.status == FAILED_STATUS
    }
}

/// What a single request observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub status: i32,
    pub location: Option<String>,
}

impl Probe {
    pub fn new(status: u16, location: Option<String>) -> Self {
        Self {
            status: i32::from(status),
            location,
        }
    }

    /// Sentinel used when the request never produced a response.
    pub fn failed() -> Self {
        Self {
            status: FAILED_STATUS,
            location: None,
        }
    }
}
