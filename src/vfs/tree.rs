//! Tree store primitives: segment-wise resolution and the nested-map builders used to
//! grow the tree.

use crate::core::utils;
use crate::vfs::entry::{Entry, Tree};

/// Walks `path` from `root`, one name at a time.
///
/// Returns `None` as soon as a name is missing or a file is met before the last name.
/// The root path resolves to `root` itself.
pub fn resolve<'a>(root: &'a Entry, path: &str) -> Option<&'a Entry> {
    utils::segments(path)
        .into_iter()
        .try_fold(root, |entry, name| entry.children()?.get(name))
}

pub fn resolve_mut<'a>(root: &'a mut Entry, path: &str) -> Option<&'a mut Entry> {
    let mut current = root;
    for name in utils::segments(path) {
        current = current.children_mut()?.get_mut(name)?;
    }
    Some(current)
}

/// Merges `src` into `dst`.
///
/// Directories present on both sides are merged recursively. In every other case the
/// value from `src` replaces the one in `dst`.
pub fn merge(src: Tree, dst: &mut Tree) {
    for (name, incoming) in src {
        merge_entry(dst, name, incoming);
    }
}

fn merge_entry(dst: &mut Tree, name: String, incoming: Entry) {
    match dst.get_mut(&name) {
        Some(Entry::Directory(existing)) if incoming.is_dir() => {
            if let Entry::Directory(children) = incoming {
                merge(children, existing);
            }
        }
        _ => {
            dst.insert(name, incoming);
        }
    }
}

/// Converts flat `(path, entry)` pairs into a nested tree.
///
/// Every path is normalized and treated as rooted at `/`. All names but the last become
/// directories; the entry is attached under the last name. Each pair is merged into the
/// tree built so far, so a later pair that descends through a name previously given a
/// file turns that name into a directory. Pairs naming the root contribute their
/// children, if any.
pub fn build_nested<I, K>(entries: I) -> Tree
where
    I: IntoIterator<Item = (K, Entry)>,
    K: AsRef<str>,
{
    let mut result = Tree::new();
    for (raw_path, value) in entries {
        let path = utils::normalize(raw_path.as_ref());
        if let Entry::Directory(children) = chain(&utils::segments(&path), value) {
            merge(children, &mut result);
        }
    }
    result
}

/// Builds the chain of (empty) directories named by `path`, the last name included.
pub fn build_nested_dir(path: &str) -> Tree {
    build_nested([(path, Entry::dir())])
}

/// Wraps `leaf` in one directory per name, innermost last.
fn chain(names: &[&str], leaf: Entry) -> Entry {
    names.iter().rev().fold(leaf, |child, name| {
        Entry::Directory(Tree::from([(name.to_string(), child)]))
    })
}
