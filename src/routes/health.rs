use std::sync::Arc;

use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cache::redis_service::RedisService;
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub status_code: u16,
    pub detail: String,
    pub result: String,
}

#[derive(Serialize, Deserialize)]
pub struct ReadyResponse {
    pub postgres: bool,
    pub redis: bool,
}

/// Liveness. Does not touch dependencies.
#[get("")]
async fn healthcheck(
    _req: actix_web::HttpRequest
) -> ApiResult<Response> {
    Ok(ApiResponse::Ok(Response {
        status_code: 200,
        detail: "ok".to_string(),
        result: "working".to_string(),
    }))
}

#[get("/ready")]
async fn ready(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    cache: web::Data<Arc<RedisService>>,
) -> HttpResponse {
    let postgres = match db.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Postgres not ready: {}", e);
            false
        }
    };
    let redis = match cache.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Redis not ready: {}", e);
            false
        }
    };

    let body = ReadyResponse { postgres, redis };
    if postgres && redis {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
