use crate::db::postgres_service::PostgresService;
use crate::types::{
    error::AppError,
    pagination::Page,
    user::{DBUserCreate, DBUserUpdate},
};
use crate::utils::password;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Signup: create user.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists("User with this email already exists".to_string()));
        }
        if self.user_exists_by_username(&payload.username).await? {
            return Err(AppError::AlreadyExists("User with this username already exists".to_string()));
        }
        let now = Utc::now();
        let user = UserActive {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name),
            username: Set(payload.username),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            disabled: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;
        Ok(user)
    }

    /// First sighting of an Auth0 identity. The username comes from the
    /// email local part, suffixed when taken.
    pub async fn provision_external_user(&self, email: &str, name: Option<&str>) -> Result<UserModel, AppError> {
        let local: String = email
            .split('@')
            .next()
            .unwrap_or_default()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
            .take(16)
            .collect();
        let base = if local.is_empty() { "user".to_string() } else { local };

        let mut username = base.clone();
        while self.user_exists_by_username(&username).await? {
            let suffix = Uuid::new_v4().simple().to_string();
            username = format!("{}_{}", base, &suffix[..8]);
        }

        let password_hash = password::hash_password(&password::random_secret())
            .map_err(|e| AppError::Internal(e.to_string()))?;
        self.create_user(DBUserCreate {
            name: name.unwrap_or(&username).to_string(),
            username,
            email: email.to_string(),
            password_hash,
        })
        .await
    }

    pub async fn list_users(&self, page: Page) -> Result<(Vec<UserModel>, u64), AppError> {
        let finder = User::find().order_by_asc(Column::CreatedAt);
        let total = finder.clone().count(&self.database_connection).await?;
        let items = finder
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.database_connection)
            .await?;
        Ok((items, total))
    }

    pub async fn update_user(&self, user_id: Uuid, patch: DBUserUpdate) -> Result<UserModel, AppError> {
        let user = self.get_user_by_id(&user_id).await?;

        if let Some(email) = patch.email.as_ref().filter(|e| **e != user.email) {
            if self.user_exists_by_email(email).await? {
                return Err(AppError::AlreadyExists("User with this email already exists".to_string()));
            }
        }
        if let Some(username) = patch.username.as_ref().filter(|u| **u != user.username) {
            if self.user_exists_by_username(username).await? {
                return Err(AppError::AlreadyExists("User with this username already exists".to_string()));
            }
        }

        let mut am: UserActive = user.into();
        if let Some(name) = patch.name {
            am.name = Set(name);
        }
        if let Some(username) = patch.username {
            am.username = Set(username);
        }
        if let Some(email) = patch.email {
            am.email = Set(email);
        }
        if let Some(hash) = patch.password_hash {
            am.password_hash = Set(hash);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_user(&self, user_id: Uuid) -> Result<(), AppError> {
        let res = User::delete_by_id(user_id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("User does not exist".to_string()));
        }
        Ok(())
    }
}
