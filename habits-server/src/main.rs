//! Habit tracker server - JSON API plus a browser form over a CSV store.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use habits::io::{CsvStore, HabitStore};
use habits_server::config::{Overrides, apply_overrides, load_config};
use habits_server::{AppState, build_router};
use tracing::info;

#[derive(Parser)]
#[command(name = "habits-server")]
#[command(about = "HTTP/JSON API for daily and weekly habits")]
struct Args {
    /// Optional TOML config file
    #[arg(long, default_value = "habits.toml")]
    config: PathBuf,

    /// Address to bind the server to
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// CSV file holding the habits
    #[arg(long, env = "HABITS_DATA")]
    data: Option<PathBuf>,

    /// Directory containing UI static files (defaults to the embedded page)
    #[arg(long)]
    ui_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("habits_server=info".parse()?)
                .add_directive("habits=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let overrides = Overrides {
        bind: args.bind,
        port: args.port,
        data_path: args.data,
        ui_dir: args.ui_dir,
    };
    let cfg = apply_overrides(load_config(&args.config)?, &overrides)?;

    let store = CsvStore::new(&cfg.data_path);
    store
        .ensure()
        .with_context(|| format!("prepare habit store {}", cfg.data_path.display()))?;
    info!(data = %cfg.data_path.display(), "habit store ready");

    let app = build_router(AppState::new(store), cfg.ui_dir.as_deref());

    let addr = cfg.socket_addr()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
