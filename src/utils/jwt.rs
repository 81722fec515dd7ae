use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::types::{error::AppError, token::Claims};

pub fn encode_access_token(
    email: &str,
    secret: &str,
    algorithm: Algorithm,
    ttl_days: i64,
    now: DateTime<Utc>,
) -> Result<String, AppError> {
    let claims = Claims {
        sub: email.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::days(ttl_days)).timestamp(),
    };
    encode(&Header::new(algorithm), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AppError::Internal(format!("token encoding failed: {}", e)))
}

pub fn decode_access_token(token: &str, secret: &str, algorithm: Algorithm) -> Result<Claims, AppError> {
    let validation = Validation::new(algorithm);
    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))
}
