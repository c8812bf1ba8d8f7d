//! Database migration runner for Caixa.
//!
//! Connects with the same layered configuration as the server
//! (`config/*.toml` plus `CAIXA__*` overrides, `.env` honoured).

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use caixa_db::migration::{Migrator, MigratorTrait};
use caixa_shared::AppConfig;

/// Caixa migration runner
#[derive(Debug, Parser)]
#[command(name = "migrator")]
#[command(about = "Applies or rolls back the Caixa database schema")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Command {
    /// Run all pending migrations
    Up,
    /// Roll back applied migrations
    Down {
        /// Number of migrations to roll back
        #[arg(short = 'n', long, default_value_t = 1)]
        steps: u32,
    },
    /// Show migration status
    Status,
    /// Drop all tables and re-run every migration
    Fresh,
    /// Roll back every migration then re-apply them
    Refresh,
    /// Roll back every migration
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sea_orm_migration=info,migrator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = caixa_db::connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    match &cli.command {
        Command::Up => Migrator::up(&db, None).await,
        Command::Down { steps } => Migrator::down(&db, Some(*steps)).await,
        Command::Status => Migrator::status(&db).await,
        Command::Fresh => Migrator::fresh(&db).await,
        Command::Refresh => Migrator::refresh(&db).await,
        Command::Reset => Migrator::reset(&db).await,
    }
    .with_context(|| format!("Migration command {:?} failed", cli.command))?;

    info!(command = ?cli.command, "Migration command finished");
    db.close().await?;

    Ok(())
}
