//! Reshapes transposed per-sample metrics sheets (one row per field, labelled by
//! the first column) into a tidy sample x metric TSV matrix.

pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod pivot;
pub mod report;

pub use error::PivotError;
pub use pivot::{PivotTable, SampleRow};
