//! Migrate command - Schema management outside of `serve`.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, MigrationState};

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // `serve` upgrades on startup; here the schema is only changed on request
    let db = Database::open(config.database_url.as_str()).await?;

    match args.action {
        MigrateAction::Up => {
            db.upgrade().await?;
            tracing::info!("Schema is up to date");
        }
        MigrateAction::Down { steps } => {
            db.downgrade(steps).await?;
            tracing::info!(steps, "Migrations reverted");
        }
        MigrateAction::Status => print_status(&db.migrations().await?),
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-applying migrations");
            db.reset().await?;
            tracing::info!("Schema rebuilt");
        }
    }

    Ok(())
}

fn print_status(states: &[MigrationState]) {
    let width = states.iter().map(|s| s.name.len()).max().unwrap_or(0);
    for state in states {
        println!("{:<width$}  {}", state.name, state.status, width = width);
    }
}
