use crate::db::postgres_service::PostgresService;
use crate::types::quiz_result::RatingRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::analytics::require_rating;
use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

#[get("/{user_id}/result/{company_id}")]
async fn company_score(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<(Uuid, Uuid)>,
) -> ApiResult<RatingRes> {
    let (user_id, company_id) = path.into_inner();
    let results = db.list_user_results(user_id, Some(company_id)).await?;
    Ok(ApiResponse::Ok(RatingRes { rating: require_rating(&results)? }))
}

#[get("/{user_id}/result")]
async fn overall_score(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<RatingRes> {
    let results = db.list_user_results(path.into_inner(), None).await?;
    Ok(ApiResponse::Ok(RatingRes { rating: require_rating(&results)? }))
}
