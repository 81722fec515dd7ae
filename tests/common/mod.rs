#![allow(dead_code)]

use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::{postgres::Postgres, redis::Redis};
use intern_backend::cache::redis_service::RedisService;
use intern_backend::config::{Auth0Config, AuthConfig, EnvConfig};
use intern_backend::db::postgres_service::PostgresService;
use intern_backend::utils::auth::AuthService;

pub mod client;

/// Services for one test.
///
/// When the environment carries a complete config (CI after
/// `stack prepare-test-db`), tests share the configured test database and
/// Redis. Otherwise each test starts its own containers.
pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub cache: Arc<RedisService>,
    pub auth: Arc<AuthService>,
    pub postgres_url: String,
    pub _postgres: Option<ContainerAsync<Postgres>>,
    pub _redis: Option<ContainerAsync<Redis>>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let auth = Arc::new(
            AuthService::new(&get_test_auth_config(), &get_test_auth0_config())
                .expect("Failed to initialize AuthService")
        );

        match EnvConfig::from_env() {
            Ok(config) => Self::from_config(&config, auth).await,
            Err(_) => Self::with_containers(auth).await,
        }
    }

    async fn from_config(config: &EnvConfig, auth: Arc<AuthService>) -> TestContext {
        let postgres_url = config.test_database_url();
        let db = Arc::new(
            PostgresService::connect(&postgres_url)
                .await
                .expect("Failed to connect to the configured test database")
        );
        let cache = Arc::new(
            RedisService::new(&config.redis_url()).expect("Failed to initialize RedisService")
        );

        TestContext {
            db,
            cache,
            auth,
            postgres_url,
            _postgres: None,
            _redis: None,
        }
    }

    async fn with_containers(auth: Arc<AuthService>) -> TestContext {
        let postgres = Postgres::default().start().await.expect("Failed to start postgres container");
        let host = postgres.get_host().await.expect("Failed to get host");
        let port = postgres.get_host_port_ipv4(5432).await.expect("Failed to get port");
        let postgres_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let redis = Redis::default().start().await.expect("Failed to start redis container");
        let redis_host = redis.get_host().await.expect("Failed to get host");
        let redis_port = redis.get_host_port_ipv4(6379).await.expect("Failed to get port");

        let db = Arc::new(
            PostgresService::new(&postgres_url)
                .await
                .expect("Failed to initialize PostgresService")
        );
        let cache = Arc::new(
            RedisService::new(&format!("redis://{}:{}", redis_host, redis_port))
                .expect("Failed to initialize RedisService")
        );

        TestContext {
            db,
            cache,
            auth,
            postgres_url,
            _postgres: Some(postgres),
            _redis: Some(redis),
        }
    }
}

pub fn get_test_auth_config() -> AuthConfig {
    AuthConfig {
        secret_key: "test-secret".to_string(),
        algorithm: "HS256".to_string(),
        access_token_expire_days: 1,
    }
}

pub fn get_test_auth0_config() -> Auth0Config {
    Auth0Config {
        domain: "test-tenant.auth0.com".to_string(),
        audience: "https://intern-backend.test".to_string(),
        algorithms: vec!["RS256".to_string()],
    }
}

// Test data helpers
pub mod test_data {
    use intern_backend::types::quiz::{Question, RQuizCreate};
    use intern_backend::types::user::RUserSignUp;
    use serde_json::json;

    pub fn sample_signup(username: &str) -> RUserSignUp {
        RUserSignUp {
            name: "Test User".to_string(),
            username: username.to_string(),
            email: format!("{}@test.com", username),
            password: "password123".to_string(),
        }
    }

    pub fn sample_questions() -> Vec<Question> {
        serde_json::from_value(json!([
            {"question": "2 + 2?", "options": {"1": "3", "2": "4", "3": "5"}, "correct": [2]},
            {"question": "Primes?", "options": {"1": "2", "2": "4", "3": "7"}, "correct": [1, 3]}
        ]))
        .expect("valid questions")
    }

    pub fn sample_quiz() -> RQuizCreate {
        RQuizCreate {
            name: "Basics".to_string(),
            description: "Warm up".to_string(),
            frequency: 7,
            questions: sample_questions(),
        }
    }
}
