use crate::db::postgres_service::PostgresService;
use crate::types::pagination::Pagination;
use crate::types::response::{ApiResponse, ApiResult, Paged};
use actix_web::{get, web};
use entity::user::Model as UserModel;
use std::sync::Arc;

#[get("")]
async fn list_users(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<Pagination>,
) -> ApiResult<Paged<UserModel>> {
    let page = query.resolve()?;
    let (items, total) = db.list_users(page).await?;
    Ok(ApiResponse::Ok(Paged { items, total, limit: page.limit, offset: page.offset }))
}
