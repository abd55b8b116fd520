use rvw_config::RvwConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `rvw config`.
pub fn handle(config: &RvwConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(config, flags.format)
}
