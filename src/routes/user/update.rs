use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserUpdate, RUserUpdate};
use crate::utils::{password::hash_password, permissions::ensure_self};
use actix_web::{patch, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[patch("/{user_id}")]
async fn update_user(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<UserModel> {
    let target = path.into_inner();
    ensure_self(&user, target)?;
    body.validate()?;
    let body = body.into_inner();

    let password_hash = match body.password {
        Some(p) => Some(hash_password(&p).map_err(|e| AppError::Internal(e.to_string()))?),
        None => None,
    };

    let updated = db
        .update_user(target, DBUserUpdate {
            name: body.name,
            username: body.username,
            email: body.email,
            password_hash,
        })
        .await?;
    Ok(ApiResponse::Ok(updated))
}
