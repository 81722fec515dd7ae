use std::str::FromStr;

use chrono::Utc;
use jsonwebtoken::{decode_header, Algorithm};

use crate::config::{Auth0Config, AuthConfig};
use crate::types::error::AppError;
use crate::utils::{auth0::Auth0Verifier, jwt};

/// Who a bearer token says the caller is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// Token we issued at sign in.
    Local { email: String },
    /// Token issued by Auth0. The user row may not exist yet.
    Auth0 { email: String, name: Option<String> },
}

impl Identity {
    pub fn email(&self) -> &str {
        match self {
            Identity::Local { email } | Identity::Auth0 { email, .. } => email,
        }
    }
}

pub struct AuthService {
    secret_key: String,
    algorithm: Algorithm,
    expire_days: i64,
    auth0: Auth0Verifier,
}

impl AuthService {
    pub fn new(auth: &AuthConfig, auth0: &Auth0Config) -> Result<Self, AppError> {
        let algorithm = Algorithm::from_str(&auth.algorithm)
            .map_err(|_| AppError::Internal(format!("unsupported algorithm {}", auth.algorithm)))?;
        Ok(AuthService {
            secret_key: auth.secret_key.clone(),
            algorithm,
            expire_days: auth.access_token_expire_days,
            auth0: Auth0Verifier::new(auth0)?,
        })
    }

    pub fn issue_token(&self, email: &str) -> Result<String, AppError> {
        jwt::encode_access_token(email, &self.secret_key, self.algorithm, self.expire_days, Utc::now())
    }

    pub async fn identify(&self, token: &str) -> Result<Identity, AppError> {
        let header = decode_header(token)
            .map_err(|_| AppError::Unauthorized("Malformed token".to_string()))?;

        if header.alg != self.algorithm && self.auth0.accepts(&header) {
            let claims = self.auth0.verify(token, &header).await?;
            let email = claims
                .email
                .ok_or_else(|| AppError::Unauthorized("Auth0 token carries no email".to_string()))?;
            return Ok(Identity::Auth0 { email, name: claims.name });
        }

        let claims = jwt::decode_access_token(token, &self.secret_key, self.algorithm)?;
        Ok(Identity::Local { email: claims.sub })
    }
}
