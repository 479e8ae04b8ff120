use std::borrow::Cow;
use std::path::Path;

/// Canonicalizes a path string for identity comparison
///
/// Expands a leading `~` to the user's home directory, strips the spurious
/// leading separator in front of Windows drive letters (`/c:/foo` becomes
/// `c:/foo`), and converts every backslash to a forward slash. Purely
/// textual: the filesystem is never touched and any input is accepted.
///
/// The result is stable under re-application: `normalize_path(normalize_path(p))`
/// equals `normalize_path(p)`.
///
/// # Examples
///
/// ```
/// use project_switcher::normalize_path;
///
/// assert_eq!(normalize_path("C:\\code\\my-app"), "C:/code/my-app");
/// assert_eq!(normalize_path("/c:/code/my-app"), "c:/code/my-app");
/// ```
pub fn normalize_path(path: &str) -> String {
    let home = dirs::home_dir().map(|h| h.to_string_lossy().into_owned());
    normalize_path_internal(path, home.as_deref())
}

/// Internal helper with explicit home directory (for testing)
pub(crate) fn normalize_path_internal(path: &str, home: Option<&str>) -> String {
    let expanded = expand_tilde(path, home);
    let stripped = strip_drive_separator(&expanded);
    stripped.replace('\\', "/")
}

/// Expand a leading `~` ("~", "~/..." or "~\...") to the home directory
fn expand_tilde<'a>(path: &'a str, home: Option<&str>) -> Cow<'a, str> {
    let Some(home) = home else {
        return Cow::Borrowed(path);
    };

    if path == "~" {
        return Cow::Owned(home.to_string());
    }

    if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        return Cow::Owned(format!("{}/{}", home, rest));
    }

    Cow::Borrowed(path)
}

/// Drop the leading separator in front of a drive-letter prefix
///
/// Some hosts report absolute Windows paths in URI form (`/c:/foo`); the
/// drive letter, not the separator, is the real path root.
fn strip_drive_separator(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.len() >= 3
        && (bytes[0] == b'/' || bytes[0] == b'\\')
        && bytes[1].is_ascii_alphabetic()
        && bytes[2] == b':'
    {
        &path[1..]
    } else {
        path
    }
}

/// Derives a project identifier for `path` relative to `projects_root`
///
/// Both sides are normalized first, so separator style and `~` shorthand
/// never affect the result. A path outside the root falls back to its full
/// normalized form rather than erroring; identifiers are labels, not
/// validated filesystem locations.
pub fn project_id_for(projects_root: &Path, path: &Path) -> String {
    let root = normalize_path(&projects_root.to_string_lossy());
    let full = normalize_path(&path.to_string_lossy());

    let root_prefix = root.trim_end_matches('/');
    match full.strip_prefix(root_prefix) {
        Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/').to_string(),
        _ => full,
    }
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = dirs::home_dir().map(|h| h.to_string_lossy().into_owned());
    format_path_with_tilde_internal(path, home.as_deref())
}

/// Internal helper for path formatting with explicit home (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&str>) -> String {
    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_normalize_converts_backslashes() {
        let normalized = normalize_path_internal("C:\\Users\\alice\\code", None);
        assert_eq!(normalized, "C:/Users/alice/code");
        assert!(!normalized.contains('\\'));
    }

    #[test]
    fn test_normalize_strips_drive_separator() {
        assert_eq!(normalize_path_internal("/c:/code/app", None), "c:/code/app");
        assert_eq!(normalize_path_internal("/C:/code/app", None), "C:/code/app");
        assert_eq!(normalize_path_internal("\\d:\\code", None), "d:/code");
    }

    #[test]
    fn test_normalize_keeps_plain_absolute_paths() {
        assert_eq!(normalize_path_internal("/home/alice/code", None), "/home/alice/code");
    }

    #[test]
    fn test_normalize_expands_tilde() {
        assert_eq!(
            normalize_path_internal("~/code/app", Some("/home/alice")),
            "/home/alice/code/app"
        );
        assert_eq!(normalize_path_internal("~", Some("/home/alice")), "/home/alice");
    }

    #[test]
    fn test_normalize_leaves_inner_tilde_alone() {
        assert_eq!(
            normalize_path_internal("/srv/~backup/app", Some("/home/alice")),
            "/srv/~backup/app"
        );
    }

    #[test]
    fn test_normalize_tilde_with_windows_home() {
        // Home itself may carry backslashes; they are converted afterwards
        assert_eq!(
            normalize_path_internal("~\\code", Some("C:\\Users\\alice")),
            "C:/Users/alice/code"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "C:\\Users\\alice\\code",
            "/c:/code/app",
            "~/projects/app",
            "/home/alice/code",
            "relative/path",
            "",
        ];
        for input in inputs {
            let once = normalize_path_internal(input, Some("/home/alice"));
            let twice = normalize_path_internal(&once, Some("/home/alice"));
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_normalize_accepts_any_string() {
        // No validation at this layer
        assert_eq!(normalize_path_internal("not a path at all", None), "not a path at all");
        assert_eq!(normalize_path_internal("", None), "");
    }

    #[test]
    fn test_project_id_for_direct_child() {
        let root = PathBuf::from("/home/alice/code");
        let project = PathBuf::from("/home/alice/code/my-app");
        assert_eq!(project_id_for(&root, &project), "my-app");
    }

    #[test]
    fn test_project_id_for_trailing_slash_root() {
        let root = PathBuf::from("/home/alice/code/");
        let project = PathBuf::from("/home/alice/code/my-app");
        assert_eq!(project_id_for(&root, &project), "my-app");
    }

    #[test]
    fn test_project_id_for_outside_root_falls_back() {
        let root = PathBuf::from("/home/alice/code");
        let elsewhere = PathBuf::from("/srv/deploys/app");
        assert_eq!(project_id_for(&root, &elsewhere), "/srv/deploys/app");
    }

    #[test]
    fn test_project_id_for_sibling_prefix_is_not_a_match() {
        // "/home/alice/code-old" shares a string prefix with the root but
        // is not under it
        let root = PathBuf::from("/home/alice/code");
        let sibling = PathBuf::from("/home/alice/code-old/app");
        assert_eq!(project_id_for(&root, &sibling), "/home/alice/code-old/app");
    }

    #[test]
    fn test_format_path_with_tilde() {
        let path = PathBuf::from("/home/alice/code/app");
        assert_eq!(format_path_with_tilde_internal(&path, Some("/home/alice")), "~/code/app");

        let outside = PathBuf::from("/opt/tools");
        assert_eq!(format_path_with_tilde_internal(&outside, Some("/home/alice")), "/opt/tools");
    }
}
