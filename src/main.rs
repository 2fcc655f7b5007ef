use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use shopsmith::{build_router, Container, ContainerConfig};

#[derive(Parser)]
#[command(name = "shopsmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long, default_value = "~/.shopsmith")]
    data_dir: String,

    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(short, long, default_value = "3000")]
    port: u16,

    #[arg(long)]
    memory_storage: bool,

    /// Serve canned model output instead of calling the inference API.
    /// Useful for local development without a HUGGINGFACE_API_KEY.
    #[arg(long)]
    mock_model: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let data_dir = expand_tilde(&cli.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let container = Arc::new(Container::new(ContainerConfig {
        data_dir,
        memory_storage: cli.memory_storage,
        mock_model: cli.mock_model,
    })?);

    let app = build_router(container);
    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
