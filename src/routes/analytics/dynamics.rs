use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::quiz_result::{DynamicsPoint, UserDynamics};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::analytics::{dynamics, group_by_user};
use crate::utils::permissions::ensure_manager;
use actix_web::{get, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;

fn non_empty<T>(items: Vec<T>) -> Result<Vec<T>, AppError> {
    if items.is_empty() {
        return Err(AppError::NotFound("Results not found".to_string()));
    }
    Ok(items)
}

#[get("/me/dynamics")]
async fn my_dynamics(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
) -> ApiResult<Vec<DynamicsPoint>> {
    let results = db.list_user_results(user.id, None).await?;
    Ok(ApiResponse::Ok(non_empty(dynamics(&results))?))
}

#[get("/{company_id}/dynamics")]
async fn company_dynamics(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<UserDynamics>> {
    let company = db.get_company(path.into_inner()).await?;
    ensure_manager(&db, &company, user.id).await?;

    let grouped = group_by_user(db.list_company_results(company.id).await?);
    let out = grouped
        .into_iter()
        .map(|(user_id, results)| UserDynamics { user_id, dynamics: dynamics(&results) })
        .collect();
    Ok(ApiResponse::Ok(non_empty(out)?))
}

#[get("/{company_id}/dynamics/{user_id}")]
async fn member_dynamics(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<(Uuid, Uuid)>,
) -> ApiResult<Vec<DynamicsPoint>> {
    let (company_id, member_id) = path.into_inner();
    let company = db.get_company(company_id).await?;
    ensure_manager(&db, &company, user.id).await?;

    let results = db.list_user_results(member_id, Some(company.id)).await?;
    Ok(ApiResponse::Ok(non_empty(dynamics(&results))?))
}
