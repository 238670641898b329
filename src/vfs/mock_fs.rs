//! This module provides a mock filesystem that keeps a whole directory tree in memory.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::utils::{self, ROOT};
use crate::core::{FsBackend, FsError, OnError, Result, RmTreeOp, WalkItem};
use crate::vfs::entry::{Entry, Tree};
use crate::vfs::{glob, tree, walk::Walk};

/// An in-memory filesystem used in place of the host filesystem during tests.
///
/// `MockFS` owns a tree of [`Entry`] values rooted at `/` and a simulated current working
/// directory. Nothing ever touches the disk.
///
/// ### Internal state
///
/// * `cwd`: the current working directory, an absolute normalized path. Relative paths
///   passed to any operation are resolved against it. Only [`FsBackend::chdir`] changes it.
/// * `root`: the root directory. It always exists and is always a directory, possibly
///   empty. Every other entry is reachable from it by exactly one chain of names.
///
/// ### Paths
///
/// Inputs use `/` as the only separator and may carry repeated or trailing separators,
/// `.` and `..`; all of them are normalized before the tree is consulted.
///
/// ### Thread Safety
///
/// Not thread‑safe. Wrap the whole instance in a `Mutex` if several threads must share it:
/// `walk`, `glob` and `listdir` read the live tree.
///
/// ### Example
///
/// ```
/// use mockfs_kit::{Entry, FsBackend, MockFS};
///
/// let mut fs = MockFS::with_entries([("/docs/note.txt", Entry::from("Hello"))]);
/// assert!(fs.isdir("/docs"));
/// assert_eq!(fs.listdir("/docs").unwrap(), vec!["note.txt"]);
///
/// fs.remove("/docs/note.txt").unwrap();
/// assert!(!fs.exists("/docs/note.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct MockFS {
    cwd: String, // inner absolute normalized path
    root: Entry, // always Entry::Directory
}

impl MockFS {
    /// Creates an empty filesystem. The current working directory is `/`.
    pub fn new() -> Self {
        Self {
            cwd: ROOT.to_string(),
            root: Entry::dir(),
        }
    }

    /// Creates a filesystem seeded with `entries` (see [`MockFS::add_entries`]).
    pub fn with_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Entry)>,
        K: AsRef<Path>,
    {
        let mut fs = Self::new();
        fs.add_entries(entries);
        fs
    }

    /// Adds entries given as flat `(path, entry)` pairs, merging them into the tree.
    ///
    /// Missing ancestors are created as directories. Use [`Entry::dir()`] as the value for
    /// an empty directory. Where a directory is added over an existing directory the two
    /// are merged; in any other overlap the new value replaces the old one.
    pub fn add_entries<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, Entry)>,
        K: AsRef<Path>,
    {
        let flat: Vec<(String, Entry)> = entries
            .into_iter()
            .map(|(path, entry)| (self.to_inner(path), entry))
            .collect();
        debug!(count = flat.len(), "adding entries");

        let nested = tree::build_nested(flat);
        if let Some(children) = self.root.children_mut() {
            tree::merge(nested, children);
        }
    }

    /// Returns the absolute normalized form of `path`.
    pub fn abspath<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        PathBuf::from(self.to_inner(path))
    }

    /// Same as [`FsBackend::remove`].
    pub fn unlink<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.remove(path)
    }

    fn to_inner<P: AsRef<Path>>(&self, path: P) -> String {
        utils::to_absolute(&utils::as_str(&path), &self.cwd)
    }

    fn resolve(&self, inner_path: &str) -> Option<&Entry> {
        tree::resolve(&self.root, inner_path)
    }

    /// Children of the parent directory of `inner_path`, if that parent is a directory.
    fn parent_dir_mut(&mut self, inner_path: &str) -> Option<&mut Tree> {
        let (parent, _) = utils::split(inner_path);
        tree::resolve_mut(&mut self.root, &parent).and_then(Entry::children_mut)
    }

    /// Removes the directory tree at `inner_path`, reporting which primitive failed.
    fn remove_tree(&mut self, inner_path: &str) -> std::result::Result<(), (RmTreeOp, FsError)> {
        if inner_path == ROOT {
            return Err((RmTreeOp::ListDir, FsError::permission_denied(ROOT)));
        }
        match self.resolve(inner_path) {
            None => return Err((RmTreeOp::ListDir, FsError::not_found(inner_path))),
            Some(Entry::File(_)) => {
                return Err((RmTreeOp::RmDir, FsError::not_a_directory(inner_path)));
            }
            Some(Entry::Directory(_)) => {}
        }

        let (parent, name) = utils::split(inner_path);
        let Some(siblings) = self.parent_dir_mut(inner_path) else {
            return Err((RmTreeOp::ListDir, FsError::not_found(&parent)));
        };
        match siblings.remove(name) {
            Some(_) => Ok(()),
            None => Err((RmTreeOp::RmDir, FsError::not_found(inner_path))),
        }
    }
}

impl Default for MockFS {
    fn default() -> Self {
        Self::new()
    }
}

impl FsBackend for MockFS {
    fn getcwd(&self) -> &Path {
        Path::new(&self.cwd)
    }

    /// Changes the current working directory.
    /// * `path` can be in relative or absolute form, but in both cases it must be an existing
    ///   directory. Otherwise the cwd is left unchanged.
    fn chdir<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let target = self.to_inner(path);
        match self.resolve(&target) {
            None => Err(FsError::not_found(&target)),
            Some(Entry::File(_)) => Err(FsError::not_a_directory(&target)),
            Some(Entry::Directory(_)) => {
                debug!(cwd = %target, "changing directory");
                self.cwd = target;
                Ok(())
            }
        }
    }

    /// Checks if a `path` exists.
    ///
    /// The entry must be listed by its parent directory. The root only counts as existing
    /// once the filesystem holds at least one entry.
    fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        let inner = self.to_inner(path);
        if inner == ROOT {
            return !self.root.is_empty();
        }
        let (parent, name) = utils::split(&inner);
        self.resolve(&parent)
            .and_then(Entry::children)
            .is_some_and(|children| children.contains_key(name))
    }

    fn isdir<P: AsRef<Path>>(&self, path: P) -> bool {
        self.resolve(&self.to_inner(path)).is_some_and(Entry::is_dir)
    }

    fn isfile<P: AsRef<Path>>(&self, path: P) -> bool {
        self.resolve(&self.to_inner(path)).is_some_and(Entry::is_file)
    }

    /// Returns the names of the immediate children of a directory, sorted.
    ///
    /// # Errors
    /// * `NotFound` if `path` does not exist.
    /// * `NotADirectory` if `path` is a file.
    fn listdir<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let inner = self.to_inner(path);
        match self.resolve(&inner) {
            None => Err(FsError::not_found(&inner)),
            Some(Entry::File(_)) => Err(FsError::not_a_directory(&inner)),
            Some(Entry::Directory(children)) => Ok(children.keys().cloned().collect()),
        }
    }

    fn getsize<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let inner = self.to_inner(path);
        self.resolve(&inner)
            .map(Entry::len)
            .ok_or_else(|| FsError::not_found(&inner))
    }

    /// Creates directory and all its parents (if needed).
    ///
    /// # Errors
    /// * `AlreadyExists` if anything (file or directory) is already at `path`.
    /// * `NotADirectory` if one of the ancestors is a file; nothing is created then.
    fn makedirs<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let inner = self.to_inner(path);
        if self.resolve(&inner).is_some() {
            return Err(FsError::already_exists(&inner));
        }

        let names = utils::segments(&inner);
        for depth in 1..names.len() {
            let ancestor = utils::from_segments(&names[..depth]);
            if self.resolve(&ancestor).is_some_and(Entry::is_file) {
                return Err(FsError::not_a_directory(&ancestor));
            }
        }

        debug!(path = %inner, "creating directories");
        let nested = tree::build_nested_dir(&inner);
        if let Some(children) = self.root.children_mut() {
            tree::merge(nested, children);
        }
        Ok(())
    }

    /// Removes a file.
    ///
    /// # Errors
    /// * `NotADirectory` if the parent of `path` is not a directory.
    /// * `NotFound` if there is nothing at `path`.
    /// * `IsADirectory` if `path` is a directory.
    fn remove<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let inner = self.to_inner(path);
        if inner == ROOT {
            return Err(FsError::is_a_directory(ROOT));
        }
        let (_, name) = utils::split(&inner);
        let siblings = self
            .parent_dir_mut(&inner)
            .ok_or_else(|| FsError::not_a_directory(&inner))?;

        match siblings.get(name) {
            None => Err(FsError::not_found(&inner)),
            Some(Entry::Directory(_)) => Err(FsError::is_a_directory(&inner)),
            Some(Entry::File(_)) => {
                siblings.remove(name);
                debug!(path = %inner, "removed file");
                Ok(())
            }
        }
    }

    /// Removes an empty directory.
    ///
    /// # Errors
    /// * `PermissionDenied` for the root.
    /// * `NotFound` if `path` or its parent does not exist.
    /// * `NotADirectory` if `path` is a file.
    /// * `DirectoryNotEmpty` if the directory still has children.
    fn rmdir<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let inner = self.to_inner(path);
        if inner == ROOT {
            return Err(FsError::permission_denied(ROOT));
        }
        let (_, name) = utils::split(&inner);
        let siblings = self
            .parent_dir_mut(&inner)
            .ok_or_else(|| FsError::not_found(&inner))?;

        match siblings.get(name) {
            None => Err(FsError::not_found(&inner)),
            Some(Entry::File(_)) => Err(FsError::not_a_directory(&inner)),
            Some(dir) if !dir.is_empty() => Err(FsError::not_empty(&inner)),
            Some(Entry::Directory(_)) => {
                siblings.remove(name);
                debug!(path = %inner, "removed directory");
                Ok(())
            }
        }
    }

    /// Removes the directory at `path` and everything beneath it.
    ///
    /// The root is never removed. Failures are handled in this order: swallowed when
    /// `ignore_errors` is set, handed to `on_error` (with the failed primitive and the `path`
    /// as given) when a callback is supplied, returned otherwise.
    fn rmtree<P: AsRef<Path>>(
        &mut self,
        path: P,
        ignore_errors: bool,
        on_error: Option<OnError<'_>>,
    ) -> Result<()> {
        let inner = self.to_inner(&path);
        let Err((op, err)) = self.remove_tree(&inner) else {
            debug!(path = %inner, "removed tree");
            return Ok(());
        };

        if ignore_errors {
            warn!(path = %inner, ?op, %err, "rmtree error ignored");
            return Ok(());
        }
        if let Some(callback) = on_error {
            warn!(path = %inner, ?op, %err, "rmtree error passed to callback");
            callback(op, path.as_ref(), &err);
            return Ok(());
        }
        Err(err)
    }

    /// Deep-copies the entry at `src` to `dst`.
    ///
    /// Whatever `dst` held is replaced. The parent of `dst` must be an existing directory.
    ///
    /// # Errors
    /// * `NotFound` if `src` or the parent of `dst` does not exist.
    /// * `NotADirectory` if the parent of `dst` is a file.
    /// * `PermissionDenied` if `dst` is the root.
    fn copytree<P: AsRef<Path>, Q: AsRef<Path>>(&mut self, src: P, dst: Q) -> Result<()> {
        let src = self.to_inner(src);
        let copy = self
            .resolve(&src)
            .cloned()
            .ok_or_else(|| FsError::not_found(&src))?;

        let dst = self.to_inner(dst);
        if dst == ROOT {
            return Err(FsError::permission_denied(ROOT));
        }
        let (parent, name) = utils::split(&dst);
        let siblings = match tree::resolve_mut(&mut self.root, &parent) {
            None => return Err(FsError::not_found(&parent)),
            Some(Entry::File(_)) => return Err(FsError::not_a_directory(&parent)),
            Some(Entry::Directory(children)) => children,
        };
        siblings.insert(name.to_string(), copy);
        debug!(%src, %dst, "copied tree");
        Ok(())
    }

    fn walk<P: AsRef<Path>>(&self, path: P) -> impl Iterator<Item = WalkItem> {
        Walk::new(&self.root, self.to_inner(path))
    }

    /// Returns the paths matching a shell-style `pattern`, sorted.
    ///
    /// Absolute patterns give absolute paths. Relative patterns are resolved against the
    /// cwd and give paths relative to it.
    fn glob<P: AsRef<Path>>(&self, pattern: P) -> Vec<PathBuf> {
        let raw = utils::as_str(&pattern);
        let inner = self.to_inner(&pattern);
        let matches = glob::expand(&self.root, &inner);
        if inner == ROOT || raw.starts_with(utils::SEPARATOR) {
            return matches.into_iter().map(PathBuf::from).collect();
        }

        let prefix = if self.cwd == ROOT {
            ROOT.to_string()
        } else {
            format!("{}{}", self.cwd, utils::SEPARATOR)
        };
        matches
            .into_iter()
            .map(|path| {
                if path == self.cwd {
                    return PathBuf::from(".");
                }
                match path.strip_prefix(&prefix) {
                    Some(relative) => PathBuf::from(relative),
                    None => PathBuf::from(path),
                }
            })
            .collect()
    }

    /// Reads the entire content of a file.
    ///
    /// # Errors
    /// * `NotADirectory` if the parent of `path` is not a directory.
    /// * `NotFound` if there is nothing at `path`.
    /// * `IsADirectory` if `path` is a directory.
    fn read<P: AsRef<Path>>(&self, path: P) -> Result<&[u8]> {
        let inner = self.to_inner(path);
        if inner == ROOT {
            return Err(FsError::is_a_directory(ROOT));
        }
        let (parent, name) = utils::split(&inner);
        let siblings = self
            .resolve(&parent)
            .and_then(Entry::children)
            .ok_or_else(|| FsError::not_a_directory(&inner))?;

        match siblings.get(name) {
            None => Err(FsError::not_found(&inner)),
            Some(Entry::Directory(_)) => Err(FsError::is_a_directory(&inner)),
            Some(Entry::File(content)) => Ok(content.as_slice()),
        }
    }

    /// Writes `content` to a file, creating it or replacing its whole content.
    ///
    /// # Errors
    /// * `NotFound` if the parent directory does not exist.
    /// * `NotADirectory` if the parent is a file.
    /// * `IsADirectory` if `path` is a directory.
    fn write<P: AsRef<Path>>(&mut self, path: P, content: &[u8]) -> Result<()> {
        let inner = self.to_inner(path);
        if inner == ROOT {
            return Err(FsError::is_a_directory(ROOT));
        }
        let (parent, name) = utils::split(&inner);
        let siblings = match tree::resolve_mut(&mut self.root, &parent) {
            None => return Err(FsError::not_found(&inner)),
            Some(Entry::File(_)) => return Err(FsError::not_a_directory(&parent)),
            Some(Entry::Directory(children)) => children,
        };
        if siblings.get(name).is_some_and(Entry::is_dir) {
            return Err(FsError::is_a_directory(&inner));
        }
        siblings.insert(name.to_string(), Entry::file(content));
        debug!(path = %inner, len = content.len(), "wrote file");
        Ok(())
    }
}
