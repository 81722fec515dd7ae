use actix_web::{web, App};
use std::sync::Arc;
use intern_backend::{
    cache::redis_service::RedisService,
    db::postgres_service::PostgresService,
    types::{company::RCompanyCreate, error::AppError, membership::MembershipAction, user::DBUserCreate},
    utils::{auth::AuthService, password::hash_password},
};
use entity::{company::Model as CompanyModel, user::Model as UserModel};
use uuid::Uuid;

use super::TestContext;

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub cache: Arc<RedisService>,
    pub auth: Arc<AuthService>,
}

impl TestClient {
    pub fn new(ctx: &TestContext) -> Self {
        TestClient {
            db: Arc::clone(&ctx.db),
            cache: Arc::clone(&ctx.cache),
            auth: Arc::clone(&ctx.auth),
        }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(Arc::clone(&self.cache)))
            .app_data(web::Data::new(Arc::clone(&self.auth)))
            .configure(intern_backend::routes::configure_routes)
    }

    /// A user with a random username and a valid bearer token.
    pub async fn create_test_user(&self) -> Result<(UserModel, String), AppError> {
        let username = format!("user_{}", &Uuid::new_v4().simple().to_string()[..12]);
        let user = self.db.create_user(DBUserCreate {
            name: "Test User".to_string(),
            username: username.clone(),
            email: format!("{}@test.com", username),
            password_hash: hash_password("password123").expect("Failed to hash password"),
        }).await?;

        let token = self.auth.issue_token(&user.email)?;
        Ok((user, token))
    }

    pub async fn create_company(&self, owner: &UserModel) -> CompanyModel {
        self.db.create_company(owner.id, RCompanyCreate {
            name: format!("Company {}", Uuid::new_v4()),
            description: "Test company".to_string(),
            is_public: true,
        })
        .await
        .expect("Failed to create company")
    }

    /// Invite + accept.
    pub async fn add_member(&self, company: &CompanyModel, user: &UserModel) {
        self.db.apply_membership_action(company.id, user.id, MembershipAction::SendInvitation)
            .await
            .expect("Failed to invite");
        self.db.apply_membership_action(company.id, user.id, MembershipAction::AcceptInvitation)
            .await
            .expect("Failed to accept");
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
