use crate::{is_redirect, resolve_location, Mode, NonRedirectPolicy, Outcome, Probe};

/// Status reported when a request produced no response at all.
pub const FAILED_STATUS: i32 = -1;

/// Prefix `target` with `base` verbatim; no URL joining is applied.
pub fn full_target(base: &str, target: &str) -> String {
    let mut out = String::with_capacity(base.len() + target.len());
    out.push_str(base);
    out.push_str(target);
    out
}

pub fn status_line(status: i32, full_target: &str) -> String {
    format!("{status}, {full_target}")
}

/// `SUCCESS` when `resolved` ends with `expectation`, `FAILURE` otherwise.
pub fn redirect_line(full_target: &str, resolved: &str, expectation: &str) -> String {
    let verdict = if resolved.ends_with(expectation) {
        "SUCCESS"
    } else {
        "FAILURE"
    };
    format!("{verdict}, {full_target}, {resolved}, {expectation}")
}

/// Report line for one probed item, or `None` if the item is skipped.
pub fn outcome_text(
    mode: Mode,
    policy: NonRedirectPolicy,
    full_target: &str,
    probe: &Probe,
    expectation: &str,
) -> Option<String> {
    match mode {
        Mode::StatusCheck => Some(status_line(probe.status, full_target)),
        Mode::RedirectCheck => {
            let location = probe
                .location
                .as_deref()
                .filter(|_| is_redirect(probe.status));
            match (location, policy) {
                (Some(location), _) => {
                    let resolved = resolve_location(full_target, location);
                    Some(redirect_line(full_target, &resolved, expectation))
                }
                (None, NonRedirectPolicy::Skip) => None,
                (None, NonRedirectPolicy::Report) => {
                    Some(redirect_line(full_target, "", expectation))
                }
            }
        }
    }
}

/// Header line followed by every outcome that produced text.
pub fn report_lines(mode: Mode, outcomes: &[Outcome]) -> Vec<String> {
    std::iter::once(mode.header().to_string())
        .chain(outcomes.iter().filter_map(|o| o.text.clone()))
        .collect()
}
