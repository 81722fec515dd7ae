use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::membership::{Actor, MembershipAction, MembershipRes};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::permissions::ensure_owner;
use entity::user::Model as UserModel;
use uuid::Uuid;

pub mod admin;
pub mod listing;
pub mod owner;
pub mod user;

/// Checks who may run `action` and runs it.
///
/// Owner actions act on `target`; user actions always act on the caller.
pub(crate) async fn step(
    db: &PostgresService,
    caller: &UserModel,
    company_id: Uuid,
    target: Option<Uuid>,
    action: MembershipAction,
) -> ApiResult<MembershipRes> {
    let company = db.get_company(company_id).await?;

    let user_id = match action.actor() {
        Actor::Owner => {
            ensure_owner(&company, caller.id)?;
            let target = target.ok_or_else(|| AppError::BadRequest("Missing user".to_string()))?;
            if target == company.owner_id {
                return Err(AppError::BadRequest("The owner cannot target themselves".to_string()));
            }
            db.get_user_by_id(&target).await?;
            target
        }
        Actor::User => {
            if caller.id == company.owner_id {
                return Err(AppError::BadRequest(
                    "The owner already runs this company".to_string(),
                ));
            }
            caller.id
        }
    };

    let status = db.apply_membership_action(company_id, user_id, action).await?;
    Ok(ApiResponse::Ok(MembershipRes { company_id, user_id, status }))
}
