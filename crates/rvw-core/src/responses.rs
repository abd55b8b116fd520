//! Report types returned as JSON by `rvw` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Result of `rvw convert`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConvertReport {
    pub input: String,
    pub output: String,
    pub export_name: String,
    pub records: usize,
    pub bytes_written: usize,
}

/// Result of `rvw check`: what a conversion would read, nothing written.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckReport {
    pub input: String,
    pub records: usize,
    /// Every header in the input, in file order.
    pub columns: Vec<String>,
    /// Headers that are not projected into the output.
    pub ignored_columns: Vec<String>,
}
