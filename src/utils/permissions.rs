use entity::company::Model as CompanyModel;
use entity::sea_orm_active_enums::MembershipStatus;
use entity::user::Model as UserModel;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;

/// Users may only change their own account.
pub fn ensure_self(current: &UserModel, target: Uuid) -> Result<(), AppError> {
    if current.id != target {
        return Err(AppError::Forbidden("You can only manage your own account".to_string()));
    }
    Ok(())
}

pub fn ensure_owner(company: &CompanyModel, user_id: Uuid) -> Result<(), AppError> {
    if company.owner_id != user_id {
        return Err(AppError::Forbidden("Only the company owner can do this".to_string()));
    }
    Ok(())
}

/// Owner or admin of the company.
pub async fn ensure_manager(
    db: &PostgresService,
    company: &CompanyModel,
    user_id: Uuid,
) -> Result<(), AppError> {
    if company.owner_id == user_id {
        return Ok(());
    }
    match db.membership_status(company.id, user_id).await? {
        Some(MembershipStatus::Admin) => Ok(()),
        _ => Err(AppError::Forbidden(
            "Only the company owner or an admin can do this".to_string(),
        )),
    }
}

/// Members and admins take quizzes.
pub async fn ensure_participant(
    db: &PostgresService,
    company_id: Uuid,
    user_id: Uuid,
) -> Result<(), AppError> {
    match db.membership_status(company_id, user_id).await? {
        Some(status) if status.is_participant() => Ok(()),
        _ => Err(AppError::Forbidden("You are not a member of this company".to_string())),
    }
}
