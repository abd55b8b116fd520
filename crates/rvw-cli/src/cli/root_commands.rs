use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Convert the review CSV into a JavaScript module (default).
    Convert(ConvertArgs),
    /// Read and validate the CSV without writing anything.
    Check(CheckArgs),
    /// Print the resolved configuration.
    Config,
    /// Print the JSON Schema of one exported review record.
    Schema,
}

impl Default for Commands {
    fn default() -> Self {
        Self::Convert(ConvertArgs::default())
    }
}

/// Arguments for `rvw convert`. Unset values come from configuration.
#[derive(Clone, Debug, Default, Args)]
pub struct ConvertArgs {
    /// CSV file to read
    #[arg(short, long)]
    pub input: Option<String>,

    /// JavaScript module to write (overwritten)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Name of the exported constant
    #[arg(short, long)]
    pub export_name: Option<String>,

    /// Escape non-ASCII characters as \uXXXX
    #[arg(long)]
    pub ascii_only: bool,
}

/// Arguments for `rvw check`.
#[derive(Clone, Debug, Default, Args)]
pub struct CheckArgs {
    /// CSV file to read
    #[arg(short, long)]
    pub input: Option<String>,
}
