use super::step;
use crate::db::postgres_service::PostgresService;
use crate::types::membership::{MembershipAction, MembershipRes};
use crate::types::response::ApiResult;
use actix_web::{patch, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;

#[patch("/owner/admins/{company_id}/{user_id}/appoint")]
async fn appoint_admin(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<(Uuid, Uuid)>,
) -> ApiResult<MembershipRes> {
    let (company_id, target) = path.into_inner();
    step(&db, &user, company_id, Some(target), MembershipAction::AppointAdmin).await
}

#[patch("/owner/admins/{company_id}/{user_id}/remove")]
async fn remove_admin(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<(Uuid, Uuid)>,
) -> ApiResult<MembershipRes> {
    let (company_id, target) = path.into_inner();
    step(&db, &user, company_id, Some(target), MembershipAction::RemoveAdmin).await
}
