use std::path::{Path, PathBuf};

mod error;
pub mod utils;

pub use error::FsError;

pub type Result<T> = std::result::Result<T, FsError>;

/// One step of a directory walk: the directory path, its subdirectory names and its file names.
pub type WalkItem = (PathBuf, Vec<String>, Vec<String>);

/// The primitive `rmtree` was performing when it failed. Passed to the error callback.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RmTreeOp {
    ListDir,
    Remove,
    RmDir,
}

/// Callback invoked by `rmtree` instead of propagating an error.
pub type OnError<'a> = &'a mut dyn FnMut(RmTreeOp, &Path, &FsError);

/// The operations an interception layer needs to stand in for the host filesystem.
///
/// Every `path` argument may be absolute or relative to the current working directory,
/// and may contain repeated or trailing separators.
pub trait FsBackend {
    /// Returns the current working directory (absolute, normalized).
    fn getcwd(&self) -> &Path;

    /// Changes the current working directory. The target must be an existing directory.
    fn chdir<P: AsRef<Path>>(&mut self, path: P) -> Result<()>;

    fn exists<P: AsRef<Path>>(&self, path: P) -> bool;

    fn isdir<P: AsRef<Path>>(&self, path: P) -> bool;

    fn isfile<P: AsRef<Path>>(&self, path: P) -> bool;

    /// Symbolic links are not modelled; always `false`.
    fn islink<P: AsRef<Path>>(&self, _path: P) -> bool {
        false
    }

    /// Sorted names of the immediate children of a directory.
    fn listdir<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>>;

    /// Content length of a file, or number of immediate children of a directory.
    fn getsize<P: AsRef<Path>>(&self, path: P) -> Result<usize>;

    /// Creates a directory together with all missing ancestors.
    fn makedirs<P: AsRef<Path>>(&mut self, path: P) -> Result<()>;

    /// Removes a file.
    fn remove<P: AsRef<Path>>(&mut self, path: P) -> Result<()>;

    /// Removes an empty directory.
    fn rmdir<P: AsRef<Path>>(&mut self, path: P) -> Result<()>;

    /// Removes a directory and everything beneath it.
    ///
    /// With `ignore_errors` every failure is swallowed. Otherwise a supplied `on_error`
    /// callback receives the failure and the call returns `Ok(())`. Without either, the
    /// error propagates.
    fn rmtree<P: AsRef<Path>>(
        &mut self,
        path: P,
        ignore_errors: bool,
        on_error: Option<OnError<'_>>,
    ) -> Result<()>;

    /// Deep-copies the entry at `src` to `dst`, replacing whatever `dst` held.
    fn copytree<P: AsRef<Path>, Q: AsRef<Path>>(&mut self, src: P, dst: Q) -> Result<()>;

    /// Level-by-level traversal of the directory at `path`.
    fn walk<P: AsRef<Path>>(&self, path: P) -> impl Iterator<Item = WalkItem>;

    /// Shell-style wildcard expansion. Relative patterns yield cwd-relative results.
    fn glob<P: AsRef<Path>>(&self, pattern: P) -> Vec<PathBuf>;

    /// Returns the content of a file.
    fn read<P: AsRef<Path>>(&self, path: P) -> Result<&[u8]>;

    /// Creates or replaces a file. Its parent directory must already exist.
    fn write<P: AsRef<Path>>(&mut self, path: P, content: &[u8]) -> Result<()>;
}
