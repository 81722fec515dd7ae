use crate::cache::redis_service::RedisService;
use crate::db::postgres_service::PostgresService;
use crate::types::quiz::{parse_questions, score, RQuizAnswers};
use crate::types::quiz_result::QuizResultRecord;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::permissions::ensure_participant;
use actix_web::{post, web};
use chrono::Utc;
use entity::user::Model as UserModel;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

#[post("/{quiz_id}/answer")]
async fn answer_quiz(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    cache: web::Data<Arc<RedisService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
    body: web::Json<RQuizAnswers>,
) -> ApiResult<QuizResultRecord> {
    let quiz = db.get_quiz(path.into_inner()).await?;
    ensure_participant(&db, quiz.company_id, user.id).await?;

    let questions = parse_questions(&quiz.questions)?;
    let RQuizAnswers(answers) = body.into_inner();
    let scored = score(&questions, &answers)?;

    let record = QuizResultRecord {
        user_id: user.id,
        company_id: quiz.company_id,
        quiz_id: quiz.id,
        time: Utc::now(),
        answered: scored.answered,
        correct: scored.correct,
    };
    db.create_quiz_result(&record).await?;
    info!(quiz_id = %quiz.id, user_id = %user.id, correct = record.correct, "Quiz answered");

    // Postgres holds the result; the cache copy only feeds recent exports.
    if let Err(e) = cache.cache_quiz_result(&record).await {
        warn!(quiz_id = %quiz.id, "Failed to cache quiz result: {}", e);
    }

    Ok(ApiResponse::Created(record))
}
