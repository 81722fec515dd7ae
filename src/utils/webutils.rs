use std::sync::Arc;

use actix_web::{dev::ServiceRequest, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::user::Model as UserModel;
use tracing::info;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::auth::{AuthService, Identity};

/// Bearer middleware: resolves the token to a user row and stores it in
/// the request extensions, where handlers read it as `ReqData<UserModel>`.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    match authenticate(&req, credentials.token()).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(req)
        }
        Err(err) => Err((err.into(), req)),
    }
}

async fn authenticate(req: &ServiceRequest, token: &str) -> Result<UserModel, AppError> {
    let db = req
        .app_data::<web::Data<Arc<PostgresService>>>()
        .ok_or_else(|| AppError::Internal("database not configured".to_string()))?;
    let auth = req
        .app_data::<web::Data<Arc<AuthService>>>()
        .ok_or_else(|| AppError::Internal("auth not configured".to_string()))?;

    let identity = auth.identify(token).await?;
    let user = match db.get_user_by_email(identity.email()).await {
        Ok(user) => user,
        Err(AppError::NotFound(_)) => match &identity {
            Identity::Auth0 { email, name } => {
                info!(email = %email, "Provisioning user from Auth0 token");
                db.provision_external_user(email, name.as_deref()).await?
            }
            Identity::Local { .. } => {
                return Err(AppError::Unauthorized("User no longer exists".to_string()))
            }
        },
        Err(e) => return Err(e),
    };

    if user.disabled {
        return Err(AppError::Forbidden("User is inactive".to_string()));
    }
    Ok(user)
}
