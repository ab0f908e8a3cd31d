use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output;

#[derive(Debug, Serialize)]
struct HealthReport {
    api_url: String,
    status: String,
    service: Option<String>,
    version: Option<String>,
}

/// Handle `laudo health`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let health = ctx.client.health().await?;
    let info = match ctx.client.service_info().await {
        Ok(info) => Some(info),
        Err(error) => {
            tracing::warn!(%error, "service info unavailable");
            None
        }
    };

    let report = HealthReport {
        api_url: ctx.config.api.base_url().to_string(),
        status: health.status.clone(),
        service: info.as_ref().map(|i| i.service.clone()),
        version: info.map(|i| i.version),
    };
    output::output(&report, flags.format)?;

    if health.is_healthy() {
        Ok(())
    } else {
        anyhow::bail!("backend reports status '{}'", health.status)
    }
}
