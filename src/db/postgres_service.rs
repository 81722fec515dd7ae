use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement};
use tracing::info;

use crate::types::error::AppError;

pub const TEST_DATABASE_TIMEZONE: &str = "Europe/Kyiv";

#[derive(Clone)]
pub struct PostgresService {
    pub(crate) database_connection: DatabaseConnection,
}

impl PostgresService {
    /// Connects and brings the schema up to date.
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        let service = Self::connect(uri).await?;
        info!("Running migrations...");
        Migrator::up(&service.database_connection, None).await?;
        info!("Migrations finished.");
        Ok(service)
    }

    /// Connects without touching the schema.
    pub async fn connect(uri: &str) -> Result<Self, DbErr> {
        info!("Connecting to PostgreSQL...");
        let database_connection = Database::connect(uri).await?;
        info!("Connected to PostgreSQL.");
        Ok(Self { database_connection })
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        Ok(self.database_connection.ping().await?)
    }

    /// The session timezone of this connection.
    pub async fn timezone(&self) -> Result<String, AppError> {
        let row = self
            .database_connection
            .query_one(Statement::from_string(
                DbBackend::Postgres,
                "SELECT current_setting('TimeZone') AS tz",
            ))
            .await?
            .ok_or_else(|| AppError::Internal("timezone query returned no row".to_string()))?;
        Ok(row.try_get::<String>("", "tz")?)
    }

    /// Creates `name` if it does not exist and pins its timezone. Returns
    /// whether the database was created.
    pub async fn provision_database(&self, name: &str, timezone: &str) -> Result<bool, AppError> {
        if !is_plain_identifier(name) {
            return Err(AppError::BadRequest(format!("invalid database name {:?}", name)));
        }
        if !timezone.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '-' | '+')) {
            return Err(AppError::BadRequest(format!("invalid timezone {:?}", timezone)));
        }

        let exists = self
            .database_connection
            .query_one(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "SELECT 1 FROM pg_database WHERE datname = $1",
                [name.into()],
            ))
            .await?
            .is_some();

        // Identifiers cannot be bound as parameters; both values were checked above.
        if !exists {
            info!(database = name, "Creating database");
            self.database_connection
                .execute_unprepared(&format!("CREATE DATABASE \"{}\"", name))
                .await?;
        }
        self.database_connection
            .execute_unprepared(&format!("ALTER DATABASE \"{}\" SET timezone TO '{}'", name, timezone))
            .await?;
        info!(database = name, timezone, "Database timezone set");
        Ok(!exists)
    }
}

fn is_plain_identifier(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 63
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit())
}
