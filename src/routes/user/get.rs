use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;

#[get("/{user_id}")]
async fn get_user(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<UserModel> {
    Ok(ApiResponse::Ok(db.get_user_by_id(&path.into_inner()).await?))
}
