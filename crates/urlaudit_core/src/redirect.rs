use url::Url;

/// Statuses treated as redirects: 301 through 307 inclusive.
pub fn is_redirect(status: i32) -> bool {
    (301..=307).contains(&status)
}

/// Turn a `Location` header value into an absolute URL.
///
/// Absolute values pass through unchanged. Relative values are resolved
/// against the scheme and host of `request_url`; a request without a scheme
/// (`a.test/x`) is taken as `http`. Only when no base can be built at all is
/// the location returned as-is.
pub fn resolve_location(request_url: &str, location: &str) -> String {
    if Url::parse(location).is_ok() {
        return location.to_string();
    }
    match request_base(request_url).and_then(|base| base.join(location).ok()) {
        Some(resolved) => resolved.to_string(),
        None => location.to_string(),
    }
}

fn request_base(request_url: &str) -> Option<Url> {
    Url::parse(request_url)
        .or_else(|_| Url::parse(&format!("http://{request_url}")))
        .ok()
}
