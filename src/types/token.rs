use serde::{Deserialize, Serialize};

/// Claims of the locally issued access token. `sub` holds the user's email.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// The subset of an Auth0 access token we read.
#[derive(Deserialize, Debug, Clone)]
pub struct Auth0Claims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenRes {
    pub access_token: String,
    pub token_type: String,
}

impl TokenRes {
    pub fn bearer(access_token: String) -> Self {
        TokenRes { access_token, token_type: "bearer".to_string() }
    }
}
