use crate::db::postgres_service::PostgresService;
use crate::types::pagination::Pagination;
use crate::types::response::{ApiResponse, ApiResult, Paged};
use crate::utils::permissions::ensure_owner;
use actix_web::{get, web};
use entity::membership::Model as MembershipModel;
use entity::sea_orm_active_enums::MembershipStatus;
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;

fn paged<T>((items, total): (Vec<T>, u64), query: &Pagination) -> ApiResult<Paged<T>> {
    let page = query.resolve()?;
    Ok(ApiResponse::Ok(Paged { items, total, limit: page.limit, offset: page.offset }))
}

#[get("/user/requests")]
async fn my_requests(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    query: web::Query<Pagination>,
) -> ApiResult<Paged<MembershipModel>> {
    let rows = db.list_user_memberships(user.id, MembershipStatus::Requested, query.resolve()?).await?;
    paged(rows, &query)
}

#[get("/user/invitations")]
async fn my_invitations(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    query: web::Query<Pagination>,
) -> ApiResult<Paged<MembershipModel>> {
    let rows = db.list_user_memberships(user.id, MembershipStatus::Invited, query.resolve()?).await?;
    paged(rows, &query)
}

#[get("/owner/invitations/{company_id}")]
async fn company_invitations(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
    query: web::Query<Pagination>,
) -> ApiResult<Paged<MembershipModel>> {
    let company = db.get_company(path.into_inner()).await?;
    ensure_owner(&company, user.id)?;
    let rows = db.list_company_memberships(company.id, MembershipStatus::Invited, query.resolve()?).await?;
    paged(rows, &query)
}

#[get("/owner/requests/{company_id}")]
async fn company_requests(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
    query: web::Query<Pagination>,
) -> ApiResult<Paged<MembershipModel>> {
    let company = db.get_company(path.into_inner()).await?;
    ensure_owner(&company, user.id)?;
    let rows = db.list_company_memberships(company.id, MembershipStatus::Requested, query.resolve()?).await?;
    paged(rows, &query)
}

/// Members and admins alike.
#[get("/company/{company_id}/users")]
async fn company_users(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    query: web::Query<Pagination>,
) -> ApiResult<Paged<UserModel>> {
    let company = db.get_company(path.into_inner()).await?;
    let rows = db
        .list_company_users(company.id, &[MembershipStatus::Member, MembershipStatus::Admin], query.resolve()?)
        .await?;
    paged(rows, &query)
}

#[get("/company/{company_id}/admins")]
async fn company_admins(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    query: web::Query<Pagination>,
) -> ApiResult<Paged<UserModel>> {
    let company = db.get_company(path.into_inner()).await?;
    let rows = db
        .list_company_users(company.id, &[MembershipStatus::Admin], query.resolve()?)
        .await?;
    paged(rows, &query)
}
