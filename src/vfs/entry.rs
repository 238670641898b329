use std::collections::BTreeMap;

/// Children of a directory, keyed by name. Iteration is always in name order.
pub type Tree = BTreeMap<String, Entry>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

/// A node of the in-memory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File(Vec<u8>),
    Directory(Tree),
}

impl Entry {
    /// A file holding `content`.
    pub fn file<C: AsRef<[u8]>>(content: C) -> Self {
        Entry::File(content.as_ref().to_vec())
    }

    /// An empty directory. Used as the directory marker in `add_entries`.
    pub fn dir() -> Self {
        Entry::Directory(Tree::new())
    }

    pub fn entry_type(&self) -> EntryType {
        match self {
            Entry::File(_) => EntryType::File,
            Entry::Directory(_) => EntryType::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        self.entry_type() == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type() == EntryType::Directory
    }

    /// File content; `None` for directories.
    pub fn content(&self) -> Option<&[u8]> {
        match self {
            Entry::File(content) => Some(content.as_slice()),
            Entry::Directory(_) => None,
        }
    }

    /// Directory children; `None` for files.
    pub fn children(&self) -> Option<&Tree> {
        match self {
            Entry::Directory(children) => Some(children),
            Entry::File(_) => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Tree> {
        match self {
            Entry::Directory(children) => Some(children),
            Entry::File(_) => None,
        }
    }

    /// Content length for a file, number of immediate children for a directory.
    pub fn len(&self) -> usize {
        match self {
            Entry::File(content) => content.len(),
            Entry::Directory(children) => children.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for Entry {
    fn from(content: &str) -> Self {
        Entry::file(content)
    }
}

impl From<Vec<u8>> for Entry {
    fn from(content: Vec<u8>) -> Self {
        Entry::File(content)
    }
}

impl From<Tree> for Entry {
    fn from(children: Tree) -> Self {
        Entry::Directory(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry() {
        let entry = Entry::file(b"Hello");
        assert!(entry.is_file());
        assert!(!entry.is_dir());
        assert_eq!(entry.entry_type(), EntryType::File);
        assert_eq!(entry.content(), Some(&b"Hello"[..]));
        assert!(entry.children().is_none());
        assert_eq!(entry.len(), 5);
    }

    #[test]
    fn test_dir_entry() {
        let mut entry = Entry::dir();
        assert!(entry.is_dir());
        assert!(entry.is_empty());
        assert!(entry.content().is_none());

        entry
            .children_mut()
            .unwrap()
            .insert("a".to_string(), Entry::from("x"));
        assert_eq!(entry.len(), 1);
    }

    #[test]
    fn test_empty_file_is_still_a_file() {
        let entry = Entry::from("");
        assert!(entry.is_file());
        assert!(entry.is_empty());
    }
}
