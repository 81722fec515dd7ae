use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use entity::company::Model as CompanyModel;
use std::sync::Arc;
use uuid::Uuid;

#[get("/{company_id}")]
async fn get_company(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<CompanyModel> {
    Ok(ApiResponse::Ok(db.get_company(path.into_inner()).await?))
}
