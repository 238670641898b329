//! Shell-style wildcard expansion against the live tree.
//!
//! A pattern is expanded one name at a time. At every step each child of every surviving
//! entry is tested, with its full path, against the pattern accumulated so far. `*`, `?`
//! and `[...]` carry their usual meaning; `**` is not recursive.

use std::borrow::Cow;

use ::glob::Pattern;
use tracing::trace;

use crate::core::utils::{self, ROOT, SEPARATOR};
use crate::vfs::entry::Entry;

/// Expands an absolute normalized `pattern` into the sorted absolute paths it matches.
pub fn expand(root: &Entry, pattern: &str) -> Vec<String> {
    if pattern == ROOT {
        return vec![ROOT.to_string()];
    }

    let mut matched: Vec<(String, &Entry)> = vec![(String::new(), root)];
    let mut accumulated = String::new();
    let mut literal = String::new();

    for segment in utils::segments(pattern) {
        accumulated.push(SEPARATOR);
        accumulated.push_str(&relax(segment));
        literal.push(SEPARATOR);
        literal.push_str(segment);
        let matcher = match Pattern::new(&accumulated) {
            Ok(compiled) => Matcher::Shell(compiled),
            Err(err) => {
                trace!(pattern = %accumulated, %err, "matching literally");
                Matcher::Literal(literal.clone())
            }
        };

        let mut next = Vec::new();
        for (path, entry) in &matched {
            let Some(children) = entry.children() else {
                continue;
            };
            for (name, child) in children {
                let candidate = format!("{path}{SEPARATOR}{name}");
                if matcher.matches(&candidate) {
                    next.push((candidate, child));
                }
            }
        }

        trace!(pattern = %accumulated, matches = next.len(), "glob step");
        if next.is_empty() {
            return Vec::new();
        }
        matched = next;
    }

    matched.into_iter().map(|(path, _)| path).collect()
}

/// A compiled pattern step.
enum Matcher {
    Shell(Pattern),
    Literal(String),
}

impl Matcher {
    fn matches(&self, candidate: &str) -> bool {
        match self {
            Matcher::Shell(pattern) => pattern.matches(candidate),
            Matcher::Literal(literal) => literal == candidate,
        }
    }
}

/// Rewrites one pattern name the `glob` crate would reject into the shell reading of it.
///
/// A name that already compiles is kept as is. Otherwise a `[` with no closing `]` is
/// taken literally and runs of `*` are folded into one; well-formed classes are kept.
fn relax(segment: &str) -> Cow<'_, str> {
    if Pattern::new(segment).is_ok() {
        return Cow::Borrowed(segment);
    }
    trace!(segment, "relaxing malformed pattern");

    let chars: Vec<char> = segment.chars().collect();
    let mut relaxed = String::with_capacity(segment.len() + 4);
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    relaxed.extend(&chars[i..=end]);
                    i = end;
                }
                None => relaxed.push_str("[[]"),
            },
            '*' if relaxed.ends_with('*') => {}
            ch => relaxed.push(ch),
        }
        i += 1;
    }
    Cow::Owned(relaxed)
}

/// Index of the `]` closing the class opened at `start`, if any.
///
/// The first member may itself be `]`, so the search starts one past it.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let first = if chars.get(start + 1) == Some(&'!') {
        start + 2
    } else {
        start + 1
    };
    chars
        .iter()
        .skip(first + 1)
        .position(|&ch| ch == ']')
        .map(|offset| first + 1 + offset)
}
