use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_public() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct RCompanyCreate {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct RCompanyUpdate {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}
