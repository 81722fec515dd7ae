use crate::db::postgres_service::PostgresService;
use crate::types::company::RCompanyUpdate;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::permissions::ensure_owner;
use actix_web::{patch, web};
use entity::company::Model as CompanyModel;
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[patch("/{company_id}")]
async fn update_company(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
    body: web::Json<RCompanyUpdate>,
) -> ApiResult<CompanyModel> {
    let company = db.get_company(path.into_inner()).await?;
    ensure_owner(&company, user.id)?;
    body.validate()?;
    Ok(ApiResponse::Ok(db.update_company(company.id, body.into_inner()).await?))
}
