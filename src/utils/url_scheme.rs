//! Redirect-target scheme normalization.

/// Ensures a URL carries an HTTP scheme before it is used as a redirect
/// target.
///
/// Original URLs are stored free-form; a bare `example.com` would otherwise
/// redirect relative to the service itself. `http://` is prepended only when
/// neither `http://` nor `https://` already prefixes the string.
pub fn ensure_http_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}
