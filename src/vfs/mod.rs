mod entry;
mod glob;
mod mock_fs;
pub mod tree;
mod walk;

pub use entry::{Entry, EntryType, Tree};
pub use mock_fs::MockFS;
pub use walk::Walk;
