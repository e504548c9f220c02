use anyhow::Context;
use fire_telemetry::{config, http, RegionConfig, TelemetryService};
use std::{path::PathBuf, sync::Arc};

fn load_region() -> anyhow::Result<RegionConfig> {
    let path = match std::env::var("REGION_CONFIG") {
        Ok(p) => Some(PathBuf::from(p)),
        Err(_) => std::env::var("REGION").ok().and_then(|name| {
            let found = config::resolve_region_path(&name);
            if found.is_none() {
                tracing::warn!("no profile found for region '{}'", name);
            }
            found
        }),
    };

    match path {
        Some(p) => RegionConfig::load(&p)
            .with_context(|| format!("failed to load region profile {}", p.display())),
        None => {
            tracing::warn!("no region profile given; using built-in california profile");
            Ok(RegionConfig::california())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut region = load_region()?;
    if let Some(seed) = std::env::var("FIRE_SEED").ok().and_then(|s| s.parse().ok()) {
        region.seed = Some(seed);
    }

    let svc = Arc::new(TelemetryService::new(region).context("invalid region profile")?);
    tracing::info!("region '{}' seed={:?}", svc.config().name, svc.config().seed);
    let app = http::router(svc);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5001".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("listening on {}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
