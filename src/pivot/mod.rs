use std::collections::HashMap;

pub mod blocks;
pub mod directory;

pub use blocks::{Segment, pivot_blocks, pivot_blocks_file, segment_samples};
pub use directory::{DirectoryPivot, SkippedFile, pivot_directory, pivot_files};

/// One output line: sample identity plus values aligned to the canonical header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRow {
    pub sample: String,
    pub values: Vec<String>,
    /// Set when the values had to be re-projected by metric name.
    pub reordered: bool,
}

/// The sample x metric matrix. `header` is fixed by the first usable sample.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PivotTable {
    pub header: Vec<String>,
    pub rows: Vec<SampleRow>,
}

impl PivotTable {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn n_samples(&self) -> usize {
        self.rows.len()
    }

    /// Aligns one sample's metrics to the header and appends it.
    pub fn push_sample(&mut self, sample: String, names: &[String], values: &[String]) {
        let (values, reordered) = reconcile(&self.header, names, values);
        if reordered {
            tracing::debug!(sample = %sample, "metric order differs from header; mapped by name");
        }
        self.rows.push(SampleRow {
            sample,
            values,
            reordered,
        });
    }
}

/// Projects `values` onto `header` order.
///
/// Identical name sequences reuse the values positionally. Otherwise values are
/// looked up by exact metric name: header metrics the sample lacks become empty
/// strings and metrics absent from the header are dropped. With duplicate names
/// in the sample, the last occurrence wins.
pub fn reconcile(header: &[String], names: &[String], values: &[String]) -> (Vec<String>, bool) {
    if names == header {
        return (values.to_vec(), false);
    }
    let by_name: HashMap<&str, &str> = names
        .iter()
        .zip(values)
        .map(|(n, v)| (n.as_str(), v.as_str()))
        .collect();
    let projected = header
        .iter()
        .map(|h| by_name.get(h.as_str()).copied().unwrap_or("").to_string())
        .collect();
    (projected, true)
}

pub(crate) fn trimmed(cells: &[String]) -> Vec<String> {
    cells.iter().map(|c| c.trim().to_string()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotMode {
    Directory,
    Blocks,
}

impl PivotMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PivotMode::Directory => "directory",
            PivotMode::Blocks => "blocks",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pivot/tests.rs"]
mod tests;
