use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::permissions::ensure_owner;
use actix_web::{delete, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[delete("/{company_id}")]
async fn delete_company(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    let company = db.get_company(path.into_inner()).await?;
    ensure_owner(&company, user.id)?;
    db.delete_company(company.id).await?;
    info!(company_id = %company.id, "Company deleted");
    Ok(ApiResponse::NoContent)
}
