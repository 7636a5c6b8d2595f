use std::collections::HashMap;
use std::path::Path;

use crate::error::PivotError;

/// Row label (trimmed first cell) to the remaining cells of that row.
#[derive(Debug, Clone, Default)]
pub struct RowIndex {
    rows: HashMap<String, Vec<String>>,
}

impl RowIndex {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let mut map = HashMap::with_capacity(rows.len());
        for row in rows {
            let mut cells = row.into_iter();
            let Some(first) = cells.next() else {
                continue;
            };
            let key = first.trim();
            if key.is_empty() {
                continue;
            }
            // Later rows replace earlier rows with the same label.
            map.insert(key.to_string(), cells.collect());
        }
        Self { rows: map }
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.rows.get(label).map(Vec::as_slice)
    }

    pub fn require(&self, label: &'static str, path: &Path) -> Result<&[String], PivotError> {
        self.get(label).ok_or_else(|| PivotError::MissingRequiredRow {
            path: path.to_path_buf(),
            label,
        })
    }

    pub fn label_count(&self) -> usize {
        self.rows.len()
    }
}
