use rvw_core::ReviewRecord;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `rvw schema`.
///
/// The schema is JSON in every format; `text` prints it pretty.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(ReviewRecord);
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Text | OutputFormat::Json => OutputFormat::Json,
    };
    output(&schema, format)
}
