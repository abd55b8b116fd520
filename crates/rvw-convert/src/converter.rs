use std::path::PathBuf;

use rvw_config::ConvertConfig;
use rvw_core::responses::{CheckReport, ConvertReport};

use crate::error::ConvertError;
use crate::reader::read_projected;
use crate::render::render_module;
use crate::writer::write_module;

/// Inputs to a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub export_name: String,
    pub ascii_only: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::from(&ConvertConfig::default())
    }
}

impl From<&ConvertConfig> for ConvertOptions {
    fn from(config: &ConvertConfig) -> Self {
        Self {
            input: PathBuf::from(&config.input),
            output: PathBuf::from(&config.output),
            export_name: config.export_name.clone(),
            ascii_only: config.ascii_only,
        }
    }
}

/// CSV to ES module converter.
#[derive(Debug, Clone)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    #[must_use]
    pub const fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Read, project, render, then write.
    ///
    /// The output file is opened only after the module text is complete, so
    /// every failure before the write leaves an existing output untouched.
    ///
    /// # Errors
    ///
    /// Any [`ConvertError`]; none are retried.
    pub fn run(&self) -> Result<ConvertReport, ConvertError> {
        let options = &self.options;
        tracing::debug!(input = %options.input.display(), "reading reviews");

        let projected = read_projected(&options.input)?;
        let module = render_module(&projected.records, &options.export_name, options.ascii_only)?;
        let bytes_written = write_module(&options.output, &module)?;

        Ok(ConvertReport {
            input: options.input.display().to_string(),
            output: options.output.display().to_string(),
            export_name: options.export_name.clone(),
            records: projected.records.len(),
            bytes_written,
        })
    }

    /// Read and project the input without rendering or writing anything.
    ///
    /// # Errors
    ///
    /// The read and projection errors of [`Self::run`].
    pub fn check(&self) -> Result<CheckReport, ConvertError> {
        let projected = read_projected(&self.options.input)?;
        let ignored_columns = projected.ignored_columns();

        Ok(CheckReport {
            input: self.options.input.display().to_string(),
            records: projected.records.len(),
            columns: projected.columns,
            ignored_columns,
        })
    }
}
