use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::quiz_result::{LatestAnswer, UserLatestAnswers};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::analytics::{group_by_user, latest_answers};
use crate::utils::permissions::ensure_manager;
use actix_web::{get, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;

#[get("/me/latest_answers")]
async fn my_latest_answers(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
) -> ApiResult<Vec<LatestAnswer>> {
    let results = db.list_user_results(user.id, None).await?;
    if results.is_empty() {
        return Err(AppError::NotFound("Results not found".to_string()));
    }
    Ok(ApiResponse::Ok(latest_answers(&results)))
}

#[get("/{company_id}/latest_answers")]
async fn company_latest_answers(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<UserLatestAnswers>> {
    let company = db.get_company(path.into_inner()).await?;
    ensure_manager(&db, &company, user.id).await?;

    let grouped = group_by_user(db.list_company_results(company.id).await?);
    if grouped.is_empty() {
        return Err(AppError::NotFound("Results not found".to_string()));
    }
    Ok(ApiResponse::Ok(
        grouped
            .into_iter()
            .map(|(user_id, results)| UserLatestAnswers { user_id, latest_answers: latest_answers(&results) })
            .collect(),
    ))
}
