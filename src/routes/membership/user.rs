use super::step;
use crate::db::postgres_service::PostgresService;
use crate::types::membership::{MembershipAction, MembershipRes};
use crate::types::response::ApiResult;
use actix_web::{delete, patch, post, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;

#[patch("/user/invitations/{company_id}/accept")]
async fn accept_invitation(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
) -> ApiResult<MembershipRes> {
    step(&db, &user, path.into_inner(), None, MembershipAction::AcceptInvitation).await
}

#[patch("/user/invitations/{company_id}/decline")]
async fn decline_invitation(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
) -> ApiResult<MembershipRes> {
    step(&db, &user, path.into_inner(), None, MembershipAction::DeclineInvitation).await
}

#[post("/user/requests/{company_id}")]
async fn send_request(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
) -> ApiResult<MembershipRes> {
    step(&db, &user, path.into_inner(), None, MembershipAction::SendRequest).await
}

#[delete("/user/requests/{company_id}")]
async fn cancel_request(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
) -> ApiResult<MembershipRes> {
    step(&db, &user, path.into_inner(), None, MembershipAction::CancelRequest).await
}

#[delete("/user/{company_id}")]
async fn leave_company(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
) -> ApiResult<MembershipRes> {
    step(&db, &user, path.into_inner(), None, MembershipAction::Leave).await
}
