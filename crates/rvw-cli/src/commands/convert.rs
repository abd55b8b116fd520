use anyhow::Context;
use rvw_config::{ConvertConfig, RvwConfig};
use rvw_convert::{ConvertOptions, Converter};

use crate::cli::root_commands::ConvertArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `rvw convert` (and bare `rvw`).
pub fn handle(args: &ConvertArgs, config: &RvwConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = resolve_options(args, &config.convert)?;
    let input = options.input.display().to_string();

    let report = Converter::new(options)
        .run()
        .with_context(|| format!("failed to convert {input}"))?;

    match flags.format {
        OutputFormat::Text => {
            if !flags.quiet {
                println!("JavaScript file '{}' created successfully!", report.output);
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format),
    }
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn resolve_options(
    args: &ConvertArgs,
    config: &ConvertConfig,
) -> anyhow::Result<ConvertOptions> {
    let mut merged = config.clone();
    if let Some(input) = &args.input {
        merged.input.clone_from(input);
    }
    if let Some(output) = &args.output {
        merged.output.clone_from(output);
    }
    if let Some(export_name) = &args.export_name {
        merged.export_name.clone_from(export_name);
    }
    if args.ascii_only {
        merged.ascii_only = true;
    }

    merged.validate()?;
    Ok(ConvertOptions::from(&merged))
}
