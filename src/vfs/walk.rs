use std::collections::VecDeque;
use std::path::PathBuf;

use crate::core::{WalkItem, utils};
use crate::vfs::entry::Entry;
use crate::vfs::tree;

/// Iterator over the directories beneath a starting path, level by level.
///
/// Every directory of the current frontier is yielded, in discovery order, before any of
/// their subdirectories. The frontier of the next level is the subdirectories of this
/// level concatenated in the order they were yielded, which a FIFO queue gives for free.
///
/// The iterator borrows the tree, so the tree cannot change under an ongoing walk.
pub struct Walk<'a> {
    root: &'a Entry,
    frontier: VecDeque<String>, // absolute normalized paths
}

impl<'a> Walk<'a> {
    /// Starts a walk at `path` (absolute, normalized). A path that is not a directory
    /// yields nothing.
    pub(crate) fn new(root: &'a Entry, path: String) -> Self {
        Self {
            root,
            frontier: VecDeque::from([path]),
        }
    }
}

impl Iterator for Walk<'_> {
    type Item = WalkItem;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.frontier.pop_front() {
            let Some(children) = tree::resolve(self.root, &path).and_then(Entry::children) else {
                continue;
            };

            let mut dirs = Vec::new();
            let mut files = Vec::new();
            for (name, entry) in children {
                if entry.is_dir() {
                    dirs.push(name.clone());
                } else {
                    files.push(name.clone());
                }
            }

            self.frontier
                .extend(dirs.iter().map(|name| utils::join(&path, name)));

            return Some((PathBuf::from(path), dirs, files));
        }
        None
    }
}
