use crate::cache::redis_service::{RedisService, ResultFilter};
use crate::db::postgres_service::PostgresService;
use crate::types::quiz_result::{ExportFormat, ExportQuery, QuizResultRecord};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::{export::results_to_csv, permissions::ensure_manager};
use actix_web::{get, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;

async fn export(
    cache: &RedisService,
    filter: ResultFilter,
    format: ExportFormat,
) -> ApiResult<Vec<QuizResultRecord>> {
    let records = cache.get_quiz_results(filter).await?;
    match format {
        ExportFormat::Json => Ok(ApiResponse::Ok(records)),
        ExportFormat::Csv => Ok(ApiResponse::Csv(results_to_csv(&records)?)),
    }
}

/// Results of the last 48 hours, served from the cache.
#[get("/me/results")]
async fn my_results(
    _req: actix_web::HttpRequest,
    cache: web::Data<Arc<RedisService>>,
    user: web::ReqData<UserModel>,
    query: web::Query<ExportQuery>,
) -> ApiResult<Vec<QuizResultRecord>> {
    export(&cache, ResultFilter::User(user.id), query.format).await
}

#[get("/quiz/{quiz_id}/results")]
async fn quiz_results(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    cache: web::Data<Arc<RedisService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
    query: web::Query<ExportQuery>,
) -> ApiResult<Vec<QuizResultRecord>> {
    let quiz = db.get_quiz(path.into_inner()).await?;
    let company = db.get_company(quiz.company_id).await?;
    ensure_manager(&db, &company, user.id).await?;
    export(&cache, ResultFilter::Quiz(quiz.id), query.format).await
}

#[get("/{company_id}/results")]
async fn company_results(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    cache: web::Data<Arc<RedisService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
    query: web::Query<ExportQuery>,
) -> ApiResult<Vec<QuizResultRecord>> {
    let company = db.get_company(path.into_inner()).await?;
    ensure_manager(&db, &company, user.id).await?;
    export(&cache, ResultFilter::Company(company.id), query.format).await
}

#[get("/{company_id}/results/{user_id}")]
async fn member_results(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    cache: web::Data<Arc<RedisService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<(Uuid, Uuid)>,
    query: web::Query<ExportQuery>,
) -> ApiResult<Vec<QuizResultRecord>> {
    let (company_id, member_id) = path.into_inner();
    let company = db.get_company(company_id).await?;
    ensure_manager(&db, &company, user.id).await?;
    export(
        &cache,
        ResultFilter::UserInCompany { user_id: member_id, company_id: company.id },
        query.format,
    )
    .await
}
