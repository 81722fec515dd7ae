use super::step;
use crate::db::postgres_service::PostgresService;
use crate::types::membership::{MembershipAction, MembershipRes};
use crate::types::response::ApiResult;
use actix_web::{delete, patch, post, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;

#[post("/owner/invitations/{company_id}/{user_id}")]
async fn send_invitation(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<(Uuid, Uuid)>,
) -> ApiResult<MembershipRes> {
    let (company_id, target) = path.into_inner();
    step(&db, &user, company_id, Some(target), MembershipAction::SendInvitation).await
}

#[delete("/owner/invitations/{company_id}/{user_id}")]
async fn cancel_invitation(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<(Uuid, Uuid)>,
) -> ApiResult<MembershipRes> {
    let (company_id, target) = path.into_inner();
    step(&db, &user, company_id, Some(target), MembershipAction::CancelInvitation).await
}

#[patch("/owner/requests/{company_id}/{user_id}/accept")]
async fn accept_request(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<(Uuid, Uuid)>,
) -> ApiResult<MembershipRes> {
    let (company_id, target) = path.into_inner();
    step(&db, &user, company_id, Some(target), MembershipAction::AcceptRequest).await
}

#[patch("/owner/requests/{company_id}/{user_id}/decline")]
async fn reject_request(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<(Uuid, Uuid)>,
) -> ApiResult<MembershipRes> {
    let (company_id, target) = path.into_inner();
    step(&db, &user, company_id, Some(target), MembershipAction::RejectRequest).await
}

#[delete("/owner/{company_id}/{user_id}")]
async fn remove_member(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<(Uuid, Uuid)>,
) -> ApiResult<MembershipRes> {
    let (company_id, target) = path.into_inner();
    step(&db, &user, company_id, Some(target), MembershipAction::RemoveMember).await
}
