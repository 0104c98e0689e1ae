//! SQLite connection handling and schema management.

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::{MigrationStatus, MigratorTrait};

pub mod migrations;

pub use migrations::Migrator;

/// A known migration and whether the database has it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub status: MigrationStatus,
}

impl MigrationState {
    pub fn is_applied(&self) -> bool {
        self.status == MigrationStatus::Applied
    }
}

/// Handle to the user database; cloning shares the pool.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the database at `url` and bring its schema up to date.
    pub async fn connect(url: &str) -> Result<Self, DbErr> {
        Self::connect_with_options(ConnectOptions::new(url)).await
    }

    /// Same as [`Database::connect`] with explicit pool options.
    pub async fn connect_with_options(options: ConnectOptions) -> Result<Self, DbErr> {
        let db = Self::open(options).await?;
        db.upgrade().await?;
        tracing::info!("Database ready, schema up to date");
        Ok(db)
    }

    /// Open without touching the schema.
    pub async fn open(options: impl Into<ConnectOptions>) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(options).await?;
        Ok(Self { connection })
    }

    /// Shared connection for stores.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply every pending migration.
    pub async fn upgrade(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Revert the latest `steps` applied migrations.
    pub async fn downgrade(&self, steps: u32) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(steps)).await
    }

    /// Drop all tables and apply every migration from scratch.
    pub async fn reset(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Known migrations in order, each with its applied status.
    pub async fn migrations(&self) -> Result<Vec<MigrationState>, DbErr> {
        let states = Migrator::get_migration_with_status(&self.connection)
            .await?
            .into_iter()
            .map(|m| MigrationState {
                name: m.name().to_string(),
                status: m.status(),
            })
            .collect();
        Ok(states)
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }
}
