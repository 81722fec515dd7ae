use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::permissions::ensure_self;
use actix_web::{delete, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[delete("/{user_id}")]
async fn delete_user(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    let target = path.into_inner();
    ensure_self(&user, target)?;
    db.delete_user(target).await?;
    info!(user_id = %target, "User deleted");
    Ok(ApiResponse::NoContent)
}
