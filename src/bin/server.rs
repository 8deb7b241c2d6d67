use clap::Parser;
use neis_timetable::utils::logger;
use neis_timetable::utils::validation::Validate;
use neis_timetable::web::{create_router, AppState};
use neis_timetable::{NeisClient, SchoolDirectory, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    logger::init_server_logger();

    config.validate()?;

    let api_key = config.resolved_api_key();
    match &api_key {
        Some(_) => tracing::info!("NEIS API key loaded"),
        None => tracing::warn!(
            "NEIS_API_KEY is not set; API requests will fail until it is provided"
        ),
    }

    let client = NeisClient::new(
        config.base_url.clone(),
        api_key,
        Some(Duration::from_secs(config.timeout_seconds)),
    )?;
    let directory: Arc<dyn SchoolDirectory> = Arc::new(client);

    let state = AppState {
        directory,
        static_dir: PathBuf::from(&config.static_dir),
    };
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.resolved_port());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("serving on http://{}", addr);
    tracing::info!("static bundle directory: {}", config.static_dir);

    axum::serve(listener, app).await?;
    Ok(())
}
