use anyhow::Context;
use rvw_config::RvwConfig;
use rvw_convert::{ConvertOptions, Converter};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::output::output;

/// Handle `rvw check`.
pub fn handle(args: &CheckArgs, config: &RvwConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut options = ConvertOptions::from(&config.convert);
    if let Some(input) = &args.input {
        options.input = input.into();
    }
    let input = options.input.display().to_string();

    let report = Converter::new(options)
        .check()
        .with_context(|| format!("failed to check {input}"))?;

    output(&report, flags.format)
}
