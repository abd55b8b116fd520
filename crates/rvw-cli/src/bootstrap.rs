use anyhow::Context;
use rvw_config::RvwConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RvwConfig> {
    RvwConfig::load_dotenv().context("failed to load .env")?;

    let config = match &flags.config {
        Some(path) => RvwConfig::load_from_file(path)
            .with_context(|| format!("failed to load config file {}", path.display()))?,
        None => RvwConfig::load().context("failed to load configuration")?,
    };

    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}
