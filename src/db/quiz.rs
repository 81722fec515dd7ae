use crate::db::postgres_service::PostgresService;
use crate::types::{
    error::AppError,
    pagination::Page,
    quiz::{RQuizCreate, RQuizUpdate},
};
use chrono::Utc;
use entity::quiz::{ActiveModel as QuizActive, Column, Entity as Quiz, Model as QuizModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(e.to_string()))
}

impl PostgresService {
    /// Questions must already be checked.
    pub async fn create_quiz(&self, company_id: Uuid, payload: RQuizCreate) -> Result<QuizModel, AppError> {
        let now = Utc::now();
        Ok(QuizActive {
            id: Set(Uuid::new_v4()),
            company_id: Set(company_id),
            name: Set(payload.name),
            description: Set(payload.description),
            frequency: Set(payload.frequency),
            questions: Set(to_json(&payload.questions)?),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn get_quiz(&self, id: Uuid) -> Result<QuizModel, AppError> {
        Ok(Quiz::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Quiz not found".to_string()))?)
    }

    pub async fn list_quizzes(&self, company_id: Uuid, page: Page) -> Result<(Vec<QuizModel>, u64), AppError> {
        let finder = Quiz::find()
            .filter(Column::CompanyId.eq(company_id))
            .order_by_asc(Column::CreatedAt);
        let total = finder.clone().count(&self.database_connection).await?;
        let items = finder.offset(page.offset).limit(page.limit).all(&self.database_connection).await?;
        Ok((items, total))
    }

    pub async fn list_all_quizzes(&self, company_id: Uuid) -> Result<Vec<QuizModel>, AppError> {
        Ok(Quiz::find()
            .filter(Column::CompanyId.eq(company_id))
            .all(&self.database_connection)
            .await?)
    }

    pub async fn update_quiz(&self, quiz: QuizModel, patch: RQuizUpdate) -> Result<QuizModel, AppError> {
        let mut am: QuizActive = quiz.into();
        if let Some(name) = patch.name {
            am.name = Set(name);
        }
        if let Some(description) = patch.description {
            am.description = Set(description);
        }
        if let Some(frequency) = patch.frequency {
            am.frequency = Set(frequency);
        }
        if let Some(questions) = patch.questions {
            am.questions = Set(to_json(&questions)?);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_quiz(&self, quiz_id: Uuid) -> Result<(), AppError> {
        let res = Quiz::delete_by_id(quiz_id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Quiz not found".to_string()));
        }
        Ok(())
    }
}
