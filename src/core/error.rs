use std::io;
use std::path::{Path, PathBuf};

/// Failure of a filesystem operation. Every variant carries the path it was raised for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FsError {
    #[error("No such file or directory: '{}'", .0.display())]
    NotFound(PathBuf),
    #[error("Not a directory: '{}'", .0.display())]
    NotADirectory(PathBuf),
    #[error("Is a directory: '{}'", .0.display())]
    IsADirectory(PathBuf),
    #[error("File exists: '{}'", .0.display())]
    AlreadyExists(PathBuf),
    #[error("Directory not empty: '{}'", .0.display())]
    DirectoryNotEmpty(PathBuf),
    #[error("Operation not permitted: '{}'", .0.display())]
    PermissionDenied(PathBuf),
}

impl FsError {
    /// The path the error was raised for.
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(path)
            | FsError::NotADirectory(path)
            | FsError::IsADirectory(path)
            | FsError::AlreadyExists(path)
            | FsError::DirectoryNotEmpty(path)
            | FsError::PermissionDenied(path) => path,
        }
    }

    /// The matching host I/O error kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            FsError::NotFound(_) => io::ErrorKind::NotFound,
            FsError::NotADirectory(_) => io::ErrorKind::NotADirectory,
            FsError::IsADirectory(_) => io::ErrorKind::IsADirectory,
            FsError::AlreadyExists(_) => io::ErrorKind::AlreadyExists,
            FsError::DirectoryNotEmpty(_) => io::ErrorKind::DirectoryNotEmpty,
            FsError::PermissionDenied(_) => io::ErrorKind::PermissionDenied,
        }
    }

    pub(crate) fn not_found(path: &str) -> Self {
        FsError::NotFound(PathBuf::from(path))
    }

    pub(crate) fn not_a_directory(path: &str) -> Self {
        FsError::NotADirectory(PathBuf::from(path))
    }

    pub(crate) fn is_a_directory(path: &str) -> Self {
        FsError::IsADirectory(PathBuf::from(path))
    }

    pub(crate) fn already_exists(path: &str) -> Self {
        FsError::AlreadyExists(PathBuf::from(path))
    }

    pub(crate) fn not_empty(path: &str) -> Self {
        FsError::DirectoryNotEmpty(PathBuf::from(path))
    }

    pub(crate) fn permission_denied(path: &str) -> Self {
        FsError::PermissionDenied(PathBuf::from(path))
    }
}

impl From<FsError> for io::Error {
    fn from(err: FsError) -> Self {
        io::Error::new(err.kind(), err)
    }
}
