use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sensor_panel::client::SensorClient;
use sensor_panel::common::AppState;
use sensor_panel::config::Config;
use sensor_panel::dom::Document;
use sensor_panel::panel::Panel;
use sensor_panel::poll;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (LOG_FORMAT=json for structured output)
    dotenvy::dotenv().ok();
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sensor_panel=debug".into()),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Starting sensor-panel...");

    // Load configuration (fail-fast)
    let config = Config::from_env()?;
    tracing::info!(
        url = %config.sensor_data_url(),
        schema = config.schema.name(),
        interval_ms = config.poll_interval_ms,
        "Configuration loaded"
    );

    // Build the page and bind the panel to it
    let document = Document::with_console_elements(&config.schema.target_ids());
    let panel = Panel::bind(&document, config.schema);

    let client = SensorClient::new(&config)?;
    tracing::info!("Sensor client initialized");

    let state = AppState::new(config, client, panel);

    // Spawn background tasks (fire-and-forget, non-blocking)
    let poller = tokio::spawn(poll::scheduler::run_poller(state.clone()));
    let probe = tokio::spawn(poll::probe::run_video_probe(state));

    shutdown_signal().await;
    poller.abort();
    probe.abort();

    tracing::info!("Sensor panel shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        },
    }
}
