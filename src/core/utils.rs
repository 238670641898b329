//! Path helpers shared by every backend.
//!
//! All inner paths use `/` as the only separator. A *normalized* path has no runs of
//! separators and no trailing separator, except for the root `/` itself.

use std::borrow::Cow;
use std::path::Path;

pub const SEPARATOR: char = '/';
pub const ROOT: &str = "/";

/// Collapses repeated separators and strips trailing ones.
///
/// Never fails: any string is reduced to its canonical form. A path made only of
/// separators becomes the root. The empty string stays empty (it means "cwd" to callers).
pub fn normalize(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    for ch in path.chars() {
        if ch == SEPARATOR && result.ends_with(SEPARATOR) {
            continue;
        }
        result.push(ch);
    }
    while result.len() > 1 && result.ends_with(SEPARATOR) {
        result.pop();
    }
    result
}

/// Splits a path into its names, skipping the empty leading segment of an absolute path.
pub fn segments(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty()).collect()
}

/// Joins `path` onto `base`. An absolute `path` replaces `base` entirely.
pub fn join(base: &str, path: &str) -> String {
    if path.starts_with(SEPARATOR) || base.is_empty() {
        return path.to_string();
    }
    if base.ends_with(SEPARATOR) {
        format!("{base}{path}")
    } else {
        format!("{base}{SEPARATOR}{path}")
    }
}

/// Returns the absolute normalized form of `path`, resolving it against `cwd` when relative.
///
/// `.` segments are dropped and `..` climbs one level; climbing above the root stays at
/// the root.
pub fn to_absolute(path: &str, cwd: &str) -> String {
    let joined = if path.starts_with(SEPARATOR) {
        normalize(path)
    } else {
        normalize(&join(cwd, path))
    };

    let mut resolved: Vec<&str> = Vec::new();
    for segment in segments(&joined) {
        match segment {
            "." => {}
            ".." => {
                resolved.pop();
            }
            name => resolved.push(name),
        }
    }
    from_segments(&resolved)
}

/// Builds an absolute path from its names. No names means the root.
pub fn from_segments<S: AsRef<str>>(names: &[S]) -> String {
    if names.is_empty() {
        return ROOT.to_string();
    }
    names.iter().fold(String::new(), |mut acc, name| {
        acc.push(SEPARATOR);
        acc.push_str(name.as_ref());
        acc
    })
}

/// Splits an absolute normalized path into its parent directory and final name.
/// The root splits into (`/`, ``).
pub fn split(path: &str) -> (String, &str) {
    match path.rfind(SEPARATOR) {
        Some(0) => (ROOT.to_string(), &path[1..]),
        Some(idx) => (path[..idx].to_string(), &path[idx + 1..]),
        None => (String::new(), path),
    }
}

/// Borrows a `Path` as a string, replacing invalid UTF‑8 lossily.
pub fn as_str<P: AsRef<Path>>(path: &P) -> Cow<'_, str> {
    path.as_ref().to_string_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/a/b/c/"), "/a/b/c");
        assert_eq!(normalize("///just////another////rustacean"), "/just/another/rustacean");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("////"), "/");
        assert_eq!(normalize("a//b///"), "a/b");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("/a/./b"), "/a/./b"); // dots are left to `to_absolute`
    }

    #[test]
    fn test_segments() {
        assert_eq!(segments("/a/b/c"), vec!["a", "b", "c"]);
        assert_eq!(segments("a/b"), vec!["a", "b"]);
        assert!(segments("/").is_empty());
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_join() {
        assert_eq!(join("/", "a"), "/a");
        assert_eq!(join("/a", "b"), "/a/b");
        assert_eq!(join("/a/", "b"), "/a/b");
        assert_eq!(join("/a", "/b"), "/b");
        assert_eq!(join("", "b"), "b");
    }

    #[test]
    fn test_to_absolute() {
        assert_eq!(to_absolute("/foo//bar/", "/cwd"), "/foo/bar");
        assert_eq!(to_absolute("foo", "/cwd"), "/cwd/foo");
        assert_eq!(to_absolute("", "/cwd/dir"), "/cwd/dir");
        assert_eq!(to_absolute(".", "/cwd/dir"), "/cwd/dir");
        assert_eq!(to_absolute("..", "/cwd/dir"), "/cwd");
        assert_eq!(to_absolute("../../../..", "/cwd/dir"), "/");
        assert_eq!(to_absolute("./a/../b", "/cwd"), "/cwd/b");
        assert_eq!(to_absolute("foo", "/"), "/foo");
        assert_eq!(to_absolute("//", "/cwd"), "/");
    }

    #[test]
    fn test_split() {
        assert_eq!(split("/"), ("/".to_string(), ""));
        assert_eq!(split("/a"), ("/".to_string(), "a"));
        assert_eq!(split("/a/b/c"), ("/a/b".to_string(), "c"));
    }

    #[test]
    fn test_from_segments() {
        assert_eq!(from_segments::<&str>(&[]), "/");
        assert_eq!(from_segments(&["a", "b"]), "/a/b");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_normalize_is_idempotent(path in "[/ab.]{0,24}") {
                let once = normalize(&path);
                prop_assert_eq!(normalize(&once), once);
            }

            #[test]
            fn prop_to_absolute_is_absolute_and_normalized(path in "[/ab.]{0,24}") {
                let abs = to_absolute(&path, "/cwd");
                prop_assert!(abs.starts_with('/'));
                prop_assert_eq!(normalize(&abs), abs.clone());
            }
        }
    }
}
