use crate::db::postgres_service::PostgresService;
use crate::types::quiz::{check_questions, RQuizUpdate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::permissions::ensure_manager;
use actix_web::{patch, web};
use entity::quiz::Model as QuizModel;
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[patch("/{quiz_id}")]
async fn update_quiz(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
    body: web::Json<RQuizUpdate>,
) -> ApiResult<QuizModel> {
    let quiz = db.get_quiz(path.into_inner()).await?;
    let company = db.get_company(quiz.company_id).await?;
    ensure_manager(&db, &company, user.id).await?;
    body.validate()?;
    if let Some(questions) = &body.questions {
        check_questions(questions)?;
    }
    Ok(ApiResponse::Ok(db.update_quiz(quiz, body.into_inner()).await?))
}
