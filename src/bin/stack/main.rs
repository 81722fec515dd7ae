//! Operational helpers for deployments and CI: env file materialisation,
//! dependency health polling, test database preparation and the HTTP
//! liveness probe used by the container health check.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use intern_backend::config::{render_env_file, EnvConfig};
use intern_backend::db::postgres_service::{PostgresService, TEST_DATABASE_TIMEZONE};
use intern_backend::logging;
use intern_backend::utils::readiness::{
    check_http, wait_until_healthy, DockerProbe, DEFAULT_ATTEMPTS, DEFAULT_DELAY,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "stack", about = "Deployment and CI helpers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the env file from the process environment. Fails if any key is empty.
    EnvFile {
        #[arg(long, default_value = ".env")]
        output: PathBuf,
    },
    /// Poll container health until all report healthy. Never fails on timeout.
    Wait {
        #[arg(long = "container", default_values = ["postgres", "redis"])]
        containers: Vec<String>,
        #[arg(long, default_value_t = DEFAULT_ATTEMPTS)]
        attempts: u32,
        /// Seconds between attempts.
        #[arg(long, default_value_t = DEFAULT_DELAY.as_secs())]
        delay: u64,
    },
    /// Create the test database and pin its timezone.
    PrepareTestDb,
    /// GET the liveness endpoint; exit 1 when unreachable or unhealthy.
    Healthcheck {
        #[arg(long)]
        url: Option<String>,
        #[arg(long, env = "PORT", default_value_t = 80)]
        port: u16,
        /// Request timeout in seconds.
        #[arg(long, default_value_t = 10)]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init_stdout() {
        eprintln!("logging disabled: {}", e);
    }

    match cli.command {
        Command::EnvFile { output } => env_file(output),
        Command::Wait { containers, attempts, delay } => {
            wait_until_healthy(&DockerProbe, &containers, attempts, Duration::from_secs(delay)).await;
            ExitCode::SUCCESS
        }
        Command::PrepareTestDb => prepare_test_db().await,
        Command::Healthcheck { url, port, timeout } => {
            let url = url.unwrap_or_else(|| format!("http://localhost:{}/healthcheck", port));
            healthcheck(&url, Duration::from_secs(timeout)).await
        }
    }
}

fn env_file(output: PathBuf) -> ExitCode {
    let rendered = match render_env_file(|key| std::env::var(key).ok()) {
        Ok(r) => r,
        Err(e) => {
            error!("Refusing to write {}: {}", output.display(), e);
            return ExitCode::FAILURE;
        }
    };
    match std::fs::write(&output, rendered) {
        Ok(()) => {
            info!("Wrote {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to write {}: {}", output.display(), e);
            ExitCode::FAILURE
        }
    }
}

async fn prepare_test_db() -> ExitCode {
    let config = match EnvConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let db = match PostgresService::connect(&config.database_url()).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect: {}", e);
            return ExitCode::FAILURE;
        }
    };
    match db.provision_database(&config.postgres.test_name, TEST_DATABASE_TIMEZONE).await {
        Ok(created) => {
            info!(database = %config.postgres.test_name, created, "Test database provisioned");
        }
        Err(e) => {
            error!("Failed to prepare test database: {}", e);
            return ExitCode::FAILURE;
        }
    }

    // New sessions pick up the database-level setting. Migrating here leaves
    // the schema ready for the integration tests.
    let test_db = match PostgresService::new(&config.test_database_url()).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to test database: {}", e);
            return ExitCode::FAILURE;
        }
    };
    match test_db.timezone().await {
        Ok(tz) => {
            info!(timezone = %tz, "Test database ready");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to prepare test database: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn healthcheck(url: &str, timeout: Duration) -> ExitCode {
    if check_http(url, timeout).await {
        ExitCode::SUCCESS
    } else {
        error!("{} failed the health check", url);
        ExitCode::FAILURE
    }
}
