use crate::{Result, Row};

use indexmap::IndexMap;

/// Normalizes a column label or field name for matching.
///
/// Matching ignores ASCII/Unicode case and underscores, so `LoNgfielD`,
/// `long_field` and `longField` all normalize to `longfield`.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Column labels of one row, with a normalized label lookup.
#[derive(Debug, Clone, Default)]
pub struct ColumnMetadata {
    labels: Vec<String>,

    /// Normalized label → column index
    by_key: IndexMap<String, usize>,
}

impl ColumnMetadata {
    /// Reads column count and labels from the cursor.
    pub fn read(row: &dyn Row) -> Result<ColumnMetadata> {
        let count = row.column_count()?;
        let mut labels = Vec::with_capacity(count);

        for index in 0..count {
            labels.push(row.column_label(index)?);
        }

        Ok(ColumnMetadata::from_labels(labels))
    }

    pub fn from_labels(labels: Vec<String>) -> ColumnMetadata {
        let mut by_key = IndexMap::with_capacity(labels.len());

        for (index, label) in labels.iter().enumerate() {
            // Later columns replace earlier ones with the same normalized label.
            if let Some(prev) = by_key.insert(normalize(label), index) {
                tracing::trace!(
                    label = %label,
                    previous = prev,
                    index,
                    "column label collides with an earlier column"
                );
            }
        }

        ColumnMetadata { labels, by_key }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Index of the column whose normalized label equals `key`.
    ///
    /// `key` must already be normalized.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.by_key.get(key).copied()
    }
}
