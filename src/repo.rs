//! Repository identifier → URL helpers.
//!
//! Registry declarations identify a repository as GitHub `owner/name`, with
//! an optional `#ref` suffix selecting a branch or tag. Both helpers are
//! deterministic string transforms with no I/O.

/// Splits `owner/name#ref` into the `owner/name` part and the optional ref.
fn split_ref(repo: &str) -> (&str, Option<&str>) {
    match repo.split_once('#') {
        Some((path, r)) if !r.is_empty() => (path, Some(r)),
        Some((path, _)) => (path, None),
        None => (repo, None),
    }
}

/// Browsable root of the repository, e.g.
/// `https://github.com/wenyan-lang/book`. A `#ref` suffix maps to the
/// `/tree/<ref>` view.
pub fn repo_root_url(repo: &str) -> String {
    let (path, r) = split_ref(repo);
    match r {
        Some(r) => format!("https://github.com/{}/tree/{}", path, r),
        None => format!("https://github.com/{}", path),
    }
}

/// Raw-content root of the repository, e.g.
/// `https://raw.githubusercontent.com/wenyan-lang/book/master`. The ref
/// defaults to `master` when the identifier carries none.
pub fn repo_raw_root_url(repo: &str) -> String {
    let (path, r) = split_ref(repo);
    format!("https://raw.githubusercontent.com/{}/{}", path, r.unwrap_or("master"))
}
