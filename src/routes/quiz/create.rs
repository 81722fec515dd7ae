use crate::db::postgres_service::PostgresService;
use crate::types::quiz::{check_questions, RQuizCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::permissions::ensure_manager;
use actix_web::{post, web};
use entity::quiz::Model as QuizModel;
use entity::user::Model as UserModel;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

#[post("/{company_id}")]
async fn create_quiz(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
    body: web::Json<RQuizCreate>,
) -> ApiResult<QuizModel> {
    let company = db.get_company(path.into_inner()).await?;
    ensure_manager(&db, &company, user.id).await?;
    body.validate()?;
    check_questions(&body.questions)?;

    let quiz = db.create_quiz(company.id, body.into_inner()).await?;
    info!(quiz_id = %quiz.id, company_id = %company.id, "Quiz created");

    let text = format!(
        "There's a new quiz {} created by company {}. You should take it!",
        quiz.id, company.id
    );
    // The quiz exists either way; a failed fan-out is only logged.
    match db.list_participant_ids(company.id).await {
        Ok(members) => {
            if let Err(e) = db.notify_users(&members, &text).await {
                warn!(quiz_id = %quiz.id, "Failed to notify members: {}", e);
            }
        }
        Err(e) => warn!(quiz_id = %quiz.id, "Failed to list members: {}", e),
    }

    Ok(ApiResponse::Created(quiz))
}
