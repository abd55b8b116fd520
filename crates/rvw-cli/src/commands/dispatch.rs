use rvw_config::RvwConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &RvwConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Convert(args) => commands::convert::handle(args, config, flags),
        Commands::Check(args) => commands::check::handle(args, config, flags),
        Commands::Config => commands::config::handle(config, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
