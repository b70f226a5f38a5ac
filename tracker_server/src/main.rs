use clap::Parser;
use std::path::PathBuf;
use tracker_core::{Config, ExerciseStore};
use tracker_server::{router, AppState};

#[derive(Parser)]
#[command(name = "tracker-server")]
#[command(about = "Exercise tracking REST API", long_about = None)]
struct Cli {
    /// Override listen port
    #[arg(long)]
    port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    bind: Option<String>,

    /// Override data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> tracker_core::Result<()> {
    // Initialize logging
    tracker_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let port = cli.port.unwrap_or(config.server.port);
    let bind = cli.bind.unwrap_or_else(|| config.server.bind.clone());
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());

    let store = ExerciseStore::open(&data_dir)?;
    let app = router(AppState::new(store));

    let addr = format!("{bind}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {} (data dir {:?})", addr, data_dir);

    axum::serve(listener, app).await?;
    Ok(())
}
