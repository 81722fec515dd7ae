use crate::db::postgres_service::PostgresService;
use crate::types::pagination::Pagination;
use crate::types::response::{ApiResponse, ApiResult, Paged};
use actix_web::{get, web};
use entity::notification::Model as NotificationModel;
use entity::user::Model as UserModel;
use std::sync::Arc;

#[get("/me")]
async fn my_notifications(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    query: web::Query<Pagination>,
) -> ApiResult<Paged<NotificationModel>> {
    let page = query.resolve()?;
    let (items, total) = db.list_user_notifications(user.id, page).await?;
    Ok(ApiResponse::Ok(Paged { items, total, limit: page.limit, offset: page.offset }))
}
