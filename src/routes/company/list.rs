use crate::db::postgres_service::PostgresService;
use crate::types::pagination::Pagination;
use crate::types::response::{ApiResponse, ApiResult, Paged};
use actix_web::{get, web};
use entity::company::Model as CompanyModel;
use std::sync::Arc;

#[get("")]
async fn list_companies(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<Pagination>,
) -> ApiResult<Paged<CompanyModel>> {
    let page = query.resolve()?;
    let (items, total) = db.list_public_companies(page).await?;
    Ok(ApiResponse::Ok(Paged { items, total, limit: page.limit, offset: page.offset }))
}
