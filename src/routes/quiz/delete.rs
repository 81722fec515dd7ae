use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::permissions::ensure_manager;
use actix_web::{delete, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;

#[delete("/{quiz_id}")]
async fn delete_quiz(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    let quiz = db.get_quiz(path.into_inner()).await?;
    let company = db.get_company(quiz.company_id).await?;
    ensure_manager(&db, &company, user.id).await?;
    db.delete_quiz(quiz.id).await?;
    Ok(ApiResponse::NoContent)
}
