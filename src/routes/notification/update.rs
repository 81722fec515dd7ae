use crate::db::postgres_service::PostgresService;
use crate::types::notification::RNotificationStatus;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{patch, web};
use entity::notification::Model as NotificationModel;
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;

#[patch("/{notification_id}")]
async fn update_notification(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: web::ReqData<UserModel>,
    path: web::Path<Uuid>,
    query: web::Query<RNotificationStatus>,
) -> ApiResult<NotificationModel> {
    let updated = db
        .set_notification_status(path.into_inner(), user.id, query.notification_status)
        .await?;
    Ok(ApiResponse::Ok(updated))
}
