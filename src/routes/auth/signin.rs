use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::TokenRes;
use crate::types::user::RUserSignIn;
use crate::utils::{auth::AuthService, password::verify_password};
use actix_web::{post, web};
use std::sync::Arc;

#[post("/signin")]
async fn signin(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: web::Data<Arc<AuthService>>,
    body: web::Json<RUserSignIn>,
) -> ApiResult<TokenRes> {
    let user = match (&body.email, &body.username) {
        (Some(email), _) => db.get_user_by_email(email).await?,
        (None, Some(username)) => db.get_user_by_username(username).await?,
        (None, None) => {
            return Err(AppError::Validation("Either email or username is required".to_string()))
        }
    };

    let matches = verify_password(&body.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !matches {
        return Err(AppError::Unauthorized("Incorrect password".to_string()));
    }
    if user.disabled {
        return Err(AppError::Forbidden("User is inactive".to_string()));
    }

    let token = auth.issue_token(&user.email)?;
    Ok(ApiResponse::Ok(TokenRes::bearer(token)))
}
