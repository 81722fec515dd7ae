use crate::db::postgres_service::PostgresService;
use crate::types::{
    error::AppError,
    membership::{MembershipAction, Transition},
    pagination::Page,
};
use chrono::Utc;
use entity::membership::{ActiveModel as MembershipActive, Column, Entity as Membership, Model as MembershipModel};
use entity::sea_orm_active_enums::MembershipStatus;
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

impl PostgresService {
    pub async fn get_membership(&self, company_id: Uuid, user_id: Uuid) -> Result<Option<MembershipModel>, AppError> {
        Ok(Membership::find()
            .filter(Column::CompanyId.eq(company_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn membership_status(&self, company_id: Uuid, user_id: Uuid) -> Result<Option<MembershipStatus>, AppError> {
        Ok(self.get_membership(company_id, user_id).await?.map(|m| m.status))
    }

    /// Runs one state-machine step inside a transaction. Returns the new
    /// status, `None` when the row was removed.
    pub async fn apply_membership_action(
        &self,
        company_id: Uuid,
        user_id: Uuid,
        action: MembershipAction,
    ) -> Result<Option<MembershipStatus>, AppError> {
        let txn = self.database_connection.begin().await?;

        let current = Membership::find()
            .filter(Column::CompanyId.eq(company_id))
            .filter(Column::UserId.eq(user_id))
            .lock_exclusive()
            .one(&txn)
            .await?;

        let transition = match action.apply(current.as_ref().map(|m| m.status)) {
            Ok(t) => t,
            Err(e) => {
                txn.rollback().await?;
                return Err(e);
            }
        };

        let now = Utc::now();
        let result = match (transition, current) {
            (Transition::Delete, Some(row)) => {
                let am: MembershipActive = row.into();
                am.delete(&txn).await?;
                None
            }
            (Transition::Set(status), Some(row)) => {
                let mut am: MembershipActive = row.into();
                am.status = Set(status);
                am.updated_at = Set(now);
                am.update(&txn).await?;
                Some(status)
            }
            (Transition::Set(status), None) => {
                MembershipActive {
                    id: Set(Uuid::new_v4()),
                    company_id: Set(company_id),
                    user_id: Set(user_id),
                    status: Set(status),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&txn)
                .await?;
                Some(status)
            }
            // apply() never deletes a missing row.
            (Transition::Delete, None) => None,
        };

        txn.commit().await?;
        info!(%company_id, %user_id, ?action, status = ?result, "Membership updated");
        Ok(result)
    }

    pub async fn list_user_memberships(
        &self,
        user_id: Uuid,
        status: MembershipStatus,
        page: Page,
    ) -> Result<(Vec<MembershipModel>, u64), AppError> {
        let finder = Membership::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Status.eq(status))
            .order_by_desc(Column::UpdatedAt);
        let total = finder.clone().count(&self.database_connection).await?;
        let items = finder.offset(page.offset).limit(page.limit).all(&self.database_connection).await?;
        Ok((items, total))
    }

    pub async fn list_company_memberships(
        &self,
        company_id: Uuid,
        status: MembershipStatus,
        page: Page,
    ) -> Result<(Vec<MembershipModel>, u64), AppError> {
        let finder = Membership::find()
            .filter(Column::CompanyId.eq(company_id))
            .filter(Column::Status.eq(status))
            .order_by_desc(Column::UpdatedAt);
        let total = finder.clone().count(&self.database_connection).await?;
        let items = finder.offset(page.offset).limit(page.limit).all(&self.database_connection).await?;
        Ok((items, total))
    }

    /// Users of a company whose membership is in one of `statuses`.
    pub async fn list_company_users(
        &self,
        company_id: Uuid,
        statuses: &[MembershipStatus],
        page: Page,
    ) -> Result<(Vec<UserModel>, u64), AppError> {
        let finder = User::find()
            .join(JoinType::InnerJoin, entity::user::Relation::Membership.def())
            .filter(Column::CompanyId.eq(company_id))
            .filter(Column::Status.is_in(statuses.iter().copied()))
            .order_by_asc(entity::user::Column::Username);
        let total = finder.clone().count(&self.database_connection).await?;
        let items = finder.offset(page.offset).limit(page.limit).all(&self.database_connection).await?;
        Ok((items, total))
    }

    /// Members and admins.
    pub async fn list_participant_ids(&self, company_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        Ok(Membership::find()
            .filter(Column::CompanyId.eq(company_id))
            .filter(Column::Status.is_in([MembershipStatus::Member, MembershipStatus::Admin]))
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(|m| m.user_id)
            .collect())
    }
}
