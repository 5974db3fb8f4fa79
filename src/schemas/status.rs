//! Working-tree status entries

/// One entry of `git status --porcelain` output
///
/// `x` is the index (staged) code and `y` the work-tree code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub x: char,
    pub y: char,

    /// Repository-relative path (the destination for renames and copies)
    pub path: String,

    /// Source path of a rename or copy
    pub from: Option<String>,
}

impl StatusEntry {
    pub fn new(x: char, y: char, path: impl Into<String>) -> Self {
        StatusEntry {
            x,
            y,
            path: path.into(),
            from: None,
        }
    }

    /// Builder method to record the source path of a rename or copy
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Nothing staged for this path (index code blank or untracked)
    pub fn is_unstaged(&self) -> bool {
        self.x == ' ' || self.x == '?'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unstaged() {
        assert!(StatusEntry::new(' ', 'M', "a.rs").is_unstaged());
        assert!(StatusEntry::new('?', '?', "b.rs").is_unstaged());
        assert!(!StatusEntry::new('M', ' ', "c.rs").is_unstaged());
        assert!(!StatusEntry::new('A', ' ', "d.rs").is_unstaged());
    }

    #[test]
    fn test_with_from() {
        let entry = StatusEntry::new('R', ' ', "new.rs").with_from("old.rs");
        assert_eq!(entry.path, "new.rs");
        assert_eq!(entry.from.as_deref(), Some("old.rs"));
    }
}
