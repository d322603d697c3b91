mod auth;
mod cli;
mod config;
mod error;
mod models;
mod ops;
mod storage;

use crate::{config::Config, models::Registry};

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cfg = Config::from_env()?;
    let mut registry = Registry::new();

    tracing::info!("Appointment log at {}", cfg.appointments_file.display());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    cli::run(&mut registry, &cfg, stdin.lock(), stdout.lock())
}
