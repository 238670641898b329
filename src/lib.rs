//! An in-memory, hierarchical mock filesystem for tests.
//!
//! ### Overview
//!
//! `mockfs-kit` keeps a directory tree entirely in memory and answers the questions code
//! usually asks the host filesystem: does a path exist, is it a directory, what does it
//! contain. It creates and removes files and directories, copies subtrees, walks the tree
//! and expands shell-style wildcards, all relative to a simulated current working
//! directory.
//!
//! **Key ideas**:
//! - **Explicit store**: a [`MockFS`] value is created, seeded and passed around by the
//!   caller. There is no global instance.
//! - **One backend trait**: [`FsBackend`] is what an interception layer programs against
//!   to stand in for `exists`, `listdir`, `makedirs`, `rmtree`, `glob` and friends.
//! - **Forgiving paths**: repeated and trailing separators, `.` and `..` are normalized
//!   away; relative paths follow the cwd.
//! - **Precise errors**: every failure is an [`FsError`] naming the condition and path,
//!   convertible into a `std::io::Error` of the matching kind.
//!
//! ### Example
//!
//! ```
//! use mockfs_kit::{Entry, FsBackend, MockFS};
//!
//! let mut fs = MockFS::with_entries([
//!     ("/a/a/a", Entry::from("")),
//!     ("/a/b/a", Entry::from("")),
//!     ("/b/a/a", Entry::from("")),
//! ]);
//!
//! assert_eq!(fs.glob("/*/a/a").len(), 2);
//!
//! fs.chdir("/a").unwrap();
//! assert_eq!(fs.listdir(".").unwrap(), vec!["a", "b"]);
//! ```

mod core;
mod vfs;

pub use crate::core::{FsBackend, FsError, OnError, Result, RmTreeOp, WalkItem, utils};
pub use crate::vfs::{Entry, EntryType, MockFS, Tree, Walk, tree};
