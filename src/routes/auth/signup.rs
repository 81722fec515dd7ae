use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserSignUp};
use crate::utils::password::hash_password;
use actix_web::{post, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

#[post("/signup")]
async fn signup(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserSignUp>,
) -> ApiResult<UserModel> {
    body.validate()?;
    let body = body.into_inner();

    let password_hash = hash_password(&body.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = db
        .create_user(DBUserCreate {
            name: body.name,
            username: body.username,
            email: body.email,
            password_hash,
        })
        .await?;
    info!(user_id = %user.id, "User signed up");

    Ok(ApiResponse::Created(user))
}
