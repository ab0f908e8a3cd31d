use anyhow::Context;
use laudo_client::AuditClient;
use laudo_config::LaudoConfig;

/// Everything a command handler needs: resolved config and a client built
/// from it.
pub struct AppContext {
    pub config: LaudoConfig,
    pub client: AuditClient,
}

impl AppContext {
    pub fn init(config: LaudoConfig) -> anyhow::Result<Self> {
        let client = AuditClient::new(config.api.clone()).context("failed to build HTTP client")?;
        tracing::debug!(api_url = %config.api.base_url(), "audit client ready");
        Ok(Self { config, client })
    }
}
