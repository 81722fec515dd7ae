use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use entity::user::Model as UserModel;

#[get("")]
async fn me(
    _req: actix_web::HttpRequest,
    user: web::ReqData<UserModel>,
) -> ApiResult<UserModel> {
    Ok(ApiResponse::Ok(user.into_inner()))
}
