//! CSV reading and record projection.

use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use rvw_core::{REQUIRED_COLUMNS, ReviewRecord};

use crate::error::ConvertError;

const UTF8_BOM: char = '\u{feff}';

/// Records projected from a CSV, plus the header row they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectedRows {
    /// Every header in file order, including ones that were not projected.
    pub columns: Vec<String>,
    /// One record per data row, in row order.
    pub records: Vec<ReviewRecord>,
}

impl ProjectedRows {
    /// Headers that do not feed any record field.
    #[must_use]
    pub fn ignored_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|column| !REQUIRED_COLUMNS.contains(&column.as_str()))
            .cloned()
            .collect()
    }
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    indices: [usize; 4],
}

impl ColumnMap {
    /// Locate every required column. A repeated header resolves to its last
    /// occurrence.
    fn resolve(headers: &StringRecord) -> Result<Self, ConvertError> {
        let mut indices = [0; 4];
        for (slot, column) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
            let mut positions = headers
                .iter()
                .enumerate()
                .filter(|(_, header)| *header == column)
                .map(|(index, _)| index);

            let first = positions.next().ok_or_else(|| ConvertError::MissingColumn {
                column: column.to_string(),
            })?;
            let last = positions.last().unwrap_or(first);
            if last != first {
                tracing::warn!(column, index = last, "duplicate CSV header; using the last one");
            }
            *slot = last;
        }

        Ok(Self { indices })
    }

    fn project(&self, row: &StringRecord, row_number: usize) -> Result<ReviewRecord, ConvertError> {
        let mut cells = [""; 4];
        for ((cell, index), column) in cells.iter_mut().zip(self.indices).zip(REQUIRED_COLUMNS) {
            *cell = row.get(index).ok_or_else(|| ConvertError::ShortRow {
                row: row_number,
                column: column.to_string(),
            })?;
        }

        Ok(ReviewRecord::from_cells(cells))
    }
}

/// Parse CSV text and project each data row into a [`ReviewRecord`].
///
/// The first row is the header. Required columns are checked before any data
/// row is read, so a header-only file with a missing column still fails.
/// Cells are taken as-is: standard quoting is undone, nothing is trimmed.
/// Cells past the last header are ignored.
///
/// # Errors
///
/// [`ConvertError::MissingColumn`] for an absent header,
/// [`ConvertError::ShortRow`] for a row that ends before a required column,
/// [`ConvertError::Csv`] for other malformed input.
pub fn project_rows<R: Read>(input: R) -> Result<ProjectedRows, ConvertError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::None)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::resolve(&headers)?;
    tracing::debug!(?columns, headers = headers.len(), "resolved required CSV columns");

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        records.push(columns.project(&row, index + 1)?);
    }

    tracing::debug!(rows = records.len(), "projected CSV rows");

    Ok(ProjectedRows {
        columns: headers.iter().map(str::to_string).collect(),
        records,
    })
}

/// Read a CSV file and project it, keeping the header row.
///
/// # Errors
///
/// [`ConvertError::InputNotFound`] when `path` does not exist,
/// [`ConvertError::InputRead`] for other I/O or UTF-8 failures, then the
/// errors of [`project_rows`].
pub fn read_projected(path: &Path) -> Result<ProjectedRows, ConvertError> {
    let content = read_input(path)?;
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(&content);
    project_rows(content.as_bytes())
}

/// Read a CSV file into review records, in row order.
///
/// # Errors
///
/// Same as [`read_projected`].
pub fn read_records(path: &Path) -> Result<Vec<ReviewRecord>, ConvertError> {
    read_projected(path).map(|projected| projected.records)
}

fn read_input(path: &Path) -> Result<String, ConvertError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(source) if source.kind() == ErrorKind::NotFound => Err(ConvertError::InputNotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(ConvertError::InputRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}
