use anyhow::Context;
use laudo_config::LaudoConfig;

use crate::cli::GlobalFlags;

/// Load layered config (dotenv, TOML files, env) and apply `--api-url`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LaudoConfig> {
    let config = LaudoConfig::load_with_dotenv().context("failed to load configuration")?;
    match &flags.api_url {
        Some(url) => config
            .with_api_url(url.as_str())
            .context("invalid --api-url"),
        None => Ok(config),
    }
}
