//! # rvw-core
//!
//! Core types shared across the reviewgen crates:
//! - The [`ReviewRecord`](record::ReviewRecord) projected from each CSV row
//! - The ordered list of required CSV column names
//! - JavaScript export identifier validation
//! - Report types printed by the `rvw` binary
//! - Cross-cutting error types

pub mod errors;
pub mod ident;
pub mod record;
pub mod responses;

pub use errors::CoreError;
pub use record::{REQUIRED_COLUMNS, ReviewRecord};
