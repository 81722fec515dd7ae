use serde::Deserialize;

use crate::types::error::AppError;

pub const DEFAULT_LIMIT: i64 = 10;

/// Raw `?limit=&offset=` query. Signed so negatives reach validation
/// instead of failing extraction.
#[derive(Deserialize, Debug, Default, Clone, Copy)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

impl Pagination {
    pub fn resolve(&self) -> Result<Page, AppError> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        let offset = self.offset.unwrap_or(0);
        if limit < 0 || offset < 0 {
            return Err(AppError::Unprocessable(
                "limit and offset must not be negative".to_string(),
            ));
        }
        Ok(Page { limit: limit as u64, offset: offset as u64 })
    }
}
