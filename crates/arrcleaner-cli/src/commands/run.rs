use crate::output::Output;
use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use std::path::PathBuf;
use tracing::{info, warn};
use watch_report_config::{AppConfig, ConfigError, PathManager};
use watch_report_core::ReportCollector;
use watch_report_models::ServiceUrls;
use watch_report_sources::{HttpSettings, JellyfinClient, RadarrClient, SonarrClient};
use watch_report_web::{create_router, AppState};

pub struct RunOptions {
    pub config_dir: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Load config, collect the report once, then serve it until Ctrl+C
pub async fn run(options: RunOptions, output: &Output) -> Result<()> {
    let paths = PathManager::resolve(options.config_dir);
    tracing::debug!(config_dir = %paths.config_dir().display(), "Resolved config directory");

    let config = match AppConfig::load(&paths) {
        Ok(config) => config,
        Err(e) => {
            // color-eyre prints the error itself
            if let Some(hint) = config_hint(&e, &paths) {
                output.info(hint);
            }
            return Err(eyre!(e).wrap_err("Configuration error"));
        }
    };

    let settings = HttpSettings::new(config.urls.http.timeout_seconds, config.urls.http.verify_tls);
    if !settings.verify_tls {
        warn!("TLS certificate verification is disabled");
    }

    let jellyfin_url = config.urls.jellyfin.base_url();
    let radarr_url = config.urls.radarr.base_url();
    let sonarr_url = config.urls.sonarr.base_url();

    let jellyfin = JellyfinClient::new(
        &jellyfin_url,
        config.credentials.jellyfin.username.clone(),
        config.credentials.jellyfin.password.clone(),
        settings,
    )
    .wrap_err("Failed to create Jellyfin client")?;
    let radarr = RadarrClient::new(&radarr_url, &config.credentials.radarr.api_key, settings)
        .wrap_err("Failed to create Radarr client")?;
    let sonarr = SonarrClient::new(&sonarr_url, &config.credentials.sonarr.api_key, settings)
        .wrap_err("Failed to create Sonarr client")?;

    let urls = ServiceUrls {
        jellyfin_url: Some(jellyfin_url),
        radarr_url: Some(radarr_url),
        sonarr_url: Some(sonarr_url),
    };

    output.info("Collecting watch data from Jellyfin, Radarr and Sonarr...");
    let mut collector =
        ReportCollector::new(Box::new(jellyfin), Box::new(radarr), Box::new(sonarr), urls);
    let report = collector.collect().await;

    if report.users.is_empty() {
        output.warn("No users found; the report is empty (check the Jellyfin credentials)");
    } else {
        output.success(format!("Report ready for {} users", report.users.len()));
    }
    for warning in &report.warnings {
        output.warn(warning);
    }
    output.report_summary(&report);

    let host = options.host.unwrap_or(config.urls.server.host);
    let port = options.port.unwrap_or(config.urls.server.port);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", addr))?;
    info!(address = %addr, "Serving report");
    output.success(format!("Report available at http://{}/", addr));

    let app = create_router(AppState::new(Some(report)));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Report server failed")?;

    info!("Server stopped");
    Ok(())
}

/// Where to look next when a config file is missing
fn config_hint(error: &ConfigError, paths: &PathManager) -> Option<String> {
    error.is_not_found().then(|| {
        format!(
            "Looked in {}. Pass --config-dir or set {} to use another directory.",
            paths.config_dir().display(),
            watch_report_config::CONFIG_DIR_ENV
        )
    })
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for Ctrl+C; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
