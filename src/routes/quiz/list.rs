use crate::db::postgres_service::PostgresService;
use crate::types::pagination::Pagination;
use crate::types::response::{ApiResponse, ApiResult, Paged};
use actix_web::{get, web};
use entity::quiz::Model as QuizModel;
use std::sync::Arc;
use uuid::Uuid;

#[get("/{company_id}")]
async fn list_quizzes(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    query: web::Query<Pagination>,
) -> ApiResult<Paged<QuizModel>> {
    let company = db.get_company(path.into_inner()).await?;
    let page = query.resolve()?;
    let (items, total) = db.list_quizzes(company.id, page).await?;
    Ok(ApiResponse::Ok(Paged { items, total, limit: page.limit, offset: page.offset }))
}
