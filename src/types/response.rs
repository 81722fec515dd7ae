use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;

use crate::types::error::AppError;

/// Successful handler outcomes. Failures travel as `AppError`.
pub enum ApiResponse<T> {
    Ok(T),
    Created(T),
    NoContent,
    /// A rendered CSV document.
    Csv(String),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(body) => HttpResponse::Ok().json(body),
            ApiResponse::Created(body) => HttpResponse::Created().json(body),
            ApiResponse::NoContent => HttpResponse::NoContent().finish(),
            ApiResponse::Csv(body) => HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .body(body),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// A page of rows plus the total the filter matched.
#[derive(Serialize, Debug)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}
