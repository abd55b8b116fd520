//! # rvw-convert
//!
//! Turns a CSV export of location reviews into an ES module:
//!
//! ```text
//! reviews.csv -> rows -> ReviewRecord list -> pretty JSON -> export const ... ; -> reviewsData.js
//! ```
//!
//! The whole module text is built in memory before the output file is
//! opened, so a failed read or a missing column never touches an existing
//! output file.
//!
//! # Usage
//!
//! ```no_run
//! use rvw_convert::{ConvertOptions, Converter};
//!
//! let report = Converter::new(ConvertOptions::default()).run().expect("convert");
//! println!("{} records -> {}", report.records, report.output);
//! ```

mod converter;
mod error;
pub mod reader;
pub mod render;
pub mod writer;

pub use converter::{ConvertOptions, Converter};
pub use error::ConvertError;
pub use reader::{ProjectedRows, project_rows, read_records};
pub use render::render_module;
pub use writer::write_module;
