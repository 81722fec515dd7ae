use crate::types::error::AppError;
use crate::utils::webutils::validate_token;
use actix_web::web;

pub mod analytics;
pub mod auth;
pub mod company;
pub mod health;
pub mod membership;
pub mod notification;
pub mod quiz;
pub mod user;

/// Malformed bodies, paths and query strings are client errors: 400.
fn extractor_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_token);

    extractor_config(cfg);

    cfg.service(
        web::scope("/healthcheck")
            .service(health::healthcheck)
            .service(health::ready)
    );
    cfg.service(
        web::scope("/auth")
            .service(auth::signup::signup)
            .service(auth::signin::signin)
            .service(
                web::scope("/me")
                    .service(auth::me::me)
                    .wrap(user_auth.clone())
            )
    );
    cfg.service(
        web::scope("/users")
            .service(user::list::list_users)
            .service(user::get::get_user)
            .service(user::update::update_user)
            .service(user::delete::delete_user)
            .wrap(user_auth.clone())
    );
    cfg.service(
        web::scope("/companies")
            .service(company::list::list_companies)
            .service(company::get::get_company)
            .service(company::create::create_company)
            .service(company::update::update_company)
            .service(company::delete::delete_company)
            .wrap(user_auth.clone())
    );
    cfg.service(
        web::scope("/memberships")
            .service(membership::listing::my_requests)
            .service(membership::listing::my_invitations)
            .service(membership::listing::company_invitations)
            .service(membership::listing::company_requests)
            .service(membership::listing::company_users)
            .service(membership::listing::company_admins)
            .service(membership::owner::send_invitation)
            .service(membership::owner::cancel_invitation)
            .service(membership::owner::accept_request)
            .service(membership::owner::reject_request)
            .service(membership::admin::appoint_admin)
            .service(membership::admin::remove_admin)
            .service(membership::owner::remove_member)
            .service(membership::user::accept_invitation)
            .service(membership::user::decline_invitation)
            .service(membership::user::send_request)
            .service(membership::user::cancel_request)
            .service(membership::user::leave_company)
            .wrap(user_auth.clone())
    );
    cfg.service(
        web::scope("/quizzes")
            .service(quiz::result::company_score)
            .service(quiz::result::overall_score)
            .service(quiz::answer::answer_quiz)
            .service(quiz::list::list_quizzes)
            .service(quiz::create::create_quiz)
            .service(quiz::update::update_quiz)
            .service(quiz::delete::delete_quiz)
            .wrap(user_auth.clone())
    );
    cfg.service(
        web::scope("/analytics")
            // `me` and `quiz` before the `{company_id}` patterns
            .service(analytics::dynamics::my_dynamics)
            .service(analytics::latest::my_latest_answers)
            .service(analytics::results::my_results)
            .service(analytics::results::quiz_results)
            .service(analytics::rating::company_rating)
            .service(analytics::rating::overall_rating)
            .service(analytics::dynamics::company_dynamics)
            .service(analytics::dynamics::member_dynamics)
            .service(analytics::latest::company_latest_answers)
            .service(analytics::results::company_results)
            .service(analytics::results::member_results)
            .wrap(user_auth.clone())
    );
    cfg.service(
        web::scope("/notifications")
            .service(notification::list::my_notifications)
            .service(notification::update::update_notification)
            .wrap(user_auth)
    );
}
