use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use log::info;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use mensajeria::{JsonStore, server::{self, AppConfig, AppState}};

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// TOML file with server settings
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Port to listen on
    #[clap(short, long, env = "PORT", value_parser)]
    port: Option<u16>,

    /// Directory holding usuarios.json and mensajes.json
    #[clap(short, long, env = "DATA_DIR", value_parser)]
    data_dir: Option<PathBuf>
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref())?
        .override_with(args.port, args.data_dir);
    info!("users in {}, messages in {}",
        config.users_file().display(), config.messages_file().display());

    let store = Arc::new(JsonStore::new(&config.data_dir));
    let app = server::router(AppState::new(store));

    let listener = TcpListener::bind(config.address())
        .await
        .with_context(|| format!("failed to bind {}", config.address()))?;
    info!("Servidor corriendo en el puerto {}", config.port);

    axum::serve(listener, app).await?;
    return Ok(());
}
