//! URL normalization utilities.

/// Joins a possibly-relative path onto the instance origin.
///
/// Paths that already carry an `http://` or `https://` scheme are returned
/// unchanged, which makes this idempotent on absolute URLs. Otherwise the
/// path is prefixed with the origin, deduplicating exactly one slash at the
/// join boundary.
pub fn absolute_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let origin = origin.strip_suffix('/').unwrap_or(origin);
    if let Some(stripped) = path.strip_prefix('/') {
        format!("{origin}/{stripped}")
    } else {
        format!("{origin}/{path}")
    }
}
