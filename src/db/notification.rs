use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, pagination::Page};
use chrono::Utc;
use entity::notification::{ActiveModel as NotificationActive, Column, Entity as Notification, Model as NotificationModel};
use entity::sea_orm_active_enums::NotificationStatus;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

fn unread(user_id: Uuid, text: String) -> NotificationActive {
    NotificationActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        time: Set(Utc::now()),
        status: Set(NotificationStatus::Unread),
        text: Set(text),
    }
}

impl PostgresService {
    pub async fn create_notification(&self, user_id: Uuid, text: String) -> Result<NotificationModel, AppError> {
        Ok(unread(user_id, text).insert(&self.database_connection).await?)
    }

    /// Same text to many users in one insert.
    pub async fn notify_users(&self, user_ids: &[Uuid], text: &str) -> Result<u64, AppError> {
        if user_ids.is_empty() {
            return Ok(0);
        }
        Notification::insert_many(user_ids.iter().map(|u| unread(*u, text.to_string())))
            .exec(&self.database_connection)
            .await?;
        Ok(user_ids.len() as u64)
    }

    pub async fn list_user_notifications(&self, user_id: Uuid, page: Page) -> Result<(Vec<NotificationModel>, u64), AppError> {
        let finder = Notification::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::Time);
        let total = finder.clone().count(&self.database_connection).await?;
        let items = finder.offset(page.offset).limit(page.limit).all(&self.database_connection).await?;
        Ok((items, total))
    }

    /// Only the recipient may change a notification's status.
    pub async fn set_notification_status(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
        status: NotificationStatus,
    ) -> Result<NotificationModel, AppError> {
        let notification = Notification::find_by_id(notification_id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Notification not found".to_string()))?;
        if notification.user_id != user_id {
            return Err(AppError::Forbidden("This notification is not yours".to_string()));
        }
        let mut am: NotificationActive = notification.into();
        am.status = Set(status);
        Ok(am.update(&self.database_connection).await?)
    }
}
