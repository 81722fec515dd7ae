use crate::db::postgres_service::PostgresService;
use crate::types::{
    company::{RCompanyCreate, RCompanyUpdate},
    error::AppError,
    pagination::Page,
};
use chrono::Utc;
use entity::company::{ActiveModel as CompanyActive, Column, Entity as Company, Model as CompanyModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn company_exists_by_name(&self, name: &str) -> Result<bool, AppError> {
        Ok(Company::find()
            .filter(Column::Name.eq(name))
            .count(&self.database_connection).await? > 0)
    }

    pub async fn create_company(&self, owner: Uuid, payload: RCompanyCreate) -> Result<CompanyModel, AppError> {
        if self.company_exists_by_name(&payload.name).await? {
            return Err(AppError::AlreadyExists("Company with this name already exists".to_string()));
        }
        let now = Utc::now();
        Ok(CompanyActive {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name),
            description: Set(payload.description),
            owner_id: Set(owner),
            is_public: Set(payload.is_public),
            created_at: Set(now),
            updated_at: Set(now),
        }.insert(&self.database_connection).await?)
    }

    pub async fn get_company(&self, id: Uuid) -> Result<CompanyModel, AppError> {
        Ok(Company::find_by_id(id).one(&self.database_connection).await?
            .ok_or_else(|| DbErr::RecordNotFound("Company not found".to_string()))?)
    }

    /// Public companies only; private ones are reachable by id.
    pub async fn list_public_companies(&self, page: Page) -> Result<(Vec<CompanyModel>, u64), AppError> {
        let finder = Company::find()
            .filter(Column::IsPublic.eq(true))
            .order_by_asc(Column::CreatedAt);
        let total = finder.clone().count(&self.database_connection).await?;
        let items = finder.offset(page.offset).limit(page.limit).all(&self.database_connection).await?;
        Ok((items, total))
    }

    pub async fn list_all_companies(&self) -> Result<Vec<CompanyModel>, AppError> {
        Ok(Company::find().all(&self.database_connection).await?)
    }

    pub async fn update_company(&self, company_id: Uuid, patch: RCompanyUpdate) -> Result<CompanyModel, AppError> {
        let company = self.get_company(company_id).await?;
        if let Some(name) = patch.name.as_ref().filter(|n| **n != company.name) {
            if self.company_exists_by_name(name).await? {
                return Err(AppError::AlreadyExists("Company with this name already exists".to_string()));
            }
        }
        let mut am: CompanyActive = company.into();
        if let Some(name) = patch.name { am.name = Set(name); }
        if let Some(description) = patch.description { am.description = Set(description); }
        if let Some(is_public) = patch.is_public { am.is_public = Set(is_public); }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_company(&self, company_id: Uuid) -> Result<(), AppError> {
        let res = Company::delete_by_id(company_id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Company not found".to_string()));
        }
        Ok(())
    }
}
