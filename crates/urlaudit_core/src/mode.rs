use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Report the observed status code of every URL.
    #[default]
    StatusCheck,
    /// Compare the observed redirect target against an expected suffix.
    RedirectCheck,
}

impl Mode {
    pub fn header(self) -> &'static str {
        match self {
            Mode::StatusCheck => "Status Code, Url",
            Mode::RedirectCheck => "Result, Url, Location, Expected",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::StatusCheck => write!(f, "status"),
            Mode::RedirectCheck => write!(f, "redirect"),
        }
    }
}

/// What redirect mode does with a response that is not a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonRedirectPolicy {
    /// Emit no line for the item.
    #[default]
    Skip,
    /// Emit a comparison against an empty location.
    Report,
}
