use entity::sea_orm_active_enums::NotificationStatus;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct RNotificationStatus {
    pub notification_status: NotificationStatus,
}
