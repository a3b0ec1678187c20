//! Menu path helpers.

/// Join a base path and a segment with exactly one `/` between them.
///
/// The result is normalized, so `join_path("/books/", "/list")` and
/// `join_path("/books", "list")` both give `/books/list`.
pub fn join_path(base: &str, segment: &str) -> String {
    normalize_path(&format!("{base}/{segment}"))
}

/// Collapse runs of `/`, drop a trailing `/` and ensure a leading `/`.
///
/// An empty or slash-only input normalizes to the root `/`.
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return "/".to_string();
    }
    format!("/{}", segments.join("/"))
}
