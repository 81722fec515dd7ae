use crate::db::postgres_service::PostgresService;
use crate::types::company::RCompanyCreate;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{post, web};
use entity::company::Model as CompanyModel;
use entity::user::Model as UserModel;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

#[post("")]
async fn create_company(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    body: web::Json<RCompanyCreate>,
) -> ApiResult<CompanyModel> {
    body.validate()?;
    let company = db.create_company(user.id, body.into_inner()).await?;
    info!(company_id = %company.id, owner = %user.id, "Company created");
    Ok(ApiResponse::Created(company))
}
