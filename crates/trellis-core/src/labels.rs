//! Column label registry
//!
//! Bidirectional mapping between column indices and their optional textual
//! labels. Only non-empty labels are stored; a column with no entry has the
//! implicit label `""`.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Registry of column labels
///
/// Invariant: all stored labels are non-empty and pairwise distinct.
/// Label-to-index resolution is a reverse scan, which is fine because
/// labels are reassigned far less often than cells are accessed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLabelRegistry {
    labels: BTreeMap<u32, String>,
}

impl ColumnLabelRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a label to a column index
    ///
    /// Setting the empty string clears the column's label. Fails with
    /// [`Error::DuplicateLabel`] if a non-empty label is already assigned
    /// to a different index; the registry is left unchanged in that case.
    pub fn set(&mut self, index: u32, label: &str) -> Result<()> {
        if label.is_empty() {
            self.labels.remove(&index);
            return Ok(());
        }

        if let Some(owner) = self.resolve(label) {
            if owner != index {
                return Err(Error::DuplicateLabel(label.to_string()));
            }
        }

        self.labels.insert(index, label.to_string());
        Ok(())
    }

    /// Get the label for a column index (`""` if unset)
    pub fn get(&self, index: u32) -> &str {
        self.labels.get(&index).map(String::as_str).unwrap_or("")
    }

    /// Find the column index carrying a label
    ///
    /// The empty string never resolves: it is the implicit label of every
    /// unlabeled column, not a label.
    pub fn resolve(&self, label: &str) -> Option<u32> {
        if label.is_empty() {
            return None;
        }

        self.labels
            .iter()
            .find(|(_, l)| l.as_str() == label)
            .map(|(&index, _)| index)
    }

    /// Move the label at `from` to `to`
    ///
    /// Same semantics as [`CellStore::rename`]: absent source is a no-op,
    /// an occupied destination is overwritten.
    ///
    /// [`CellStore::rename`]: crate::CellStore::rename
    pub fn rename(&mut self, from: u32, to: u32) {
        if let Some(label) = self.labels.remove(&from) {
            self.labels.insert(to, label);
        }
    }

    /// Remove the label at an index, returning it
    pub fn remove(&mut self, index: u32) -> Option<String> {
        self.labels.remove(&index)
    }

    /// Remove all labels
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    /// Get the number of labeled columns
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if no column is labeled
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over (index, label) pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.labels.iter().map(|(&index, label)| (index, label.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut registry = ColumnLabelRegistry::new();

        registry.set(0, "name").unwrap();
        registry.set(2, "age").unwrap();

        assert_eq!(registry.get(0), "name");
        assert_eq!(registry.get(1), "");
        assert_eq!(registry.get(2), "age");
    }

    #[test]
    fn test_resolve() {
        let mut registry = ColumnLabelRegistry::new();
        registry.set(3, "city").unwrap();

        assert_eq!(registry.resolve("city"), Some(3));
        assert_eq!(registry.resolve("country"), None);
        assert_eq!(registry.resolve(""), None);
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let mut registry = ColumnLabelRegistry::new();
        registry.set(0, "dup").unwrap();

        let err = registry.set(1, "dup").unwrap_err();
        assert_eq!(err, Error::DuplicateLabel("dup".to_string()));

        // The failed call left column 1 unlabeled
        assert_eq!(registry.get(1), "");
        assert_eq!(registry.resolve("dup"), Some(0));
    }

    #[test]
    fn test_reassigning_same_index_is_allowed() {
        let mut registry = ColumnLabelRegistry::new();

        registry.set(0, "first").unwrap();
        registry.set(0, "first").unwrap();
        registry.set(0, "renamed").unwrap();

        assert_eq!(registry.get(0), "renamed");
        assert_eq!(registry.resolve("first"), None);
    }

    #[test]
    fn test_empty_label_clears() {
        let mut registry = ColumnLabelRegistry::new();

        registry.set(0, "temp").unwrap();
        registry.set(0, "").unwrap();

        assert_eq!(registry.get(0), "");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_rename_index() {
        let mut registry = ColumnLabelRegistry::new();

        registry.set(1, "moved").unwrap();
        registry.rename(1, 4);

        assert_eq!(registry.get(1), "");
        assert_eq!(registry.get(4), "moved");
        assert_eq!(registry.resolve("moved"), Some(4));
    }
}
