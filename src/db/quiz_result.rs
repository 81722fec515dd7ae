use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, quiz_result::QuizResultRecord};
use chrono::{DateTime, Utc};
use entity::quiz_result::{ActiveModel as ResultActive, Column, Entity as QuizResult, Model as QuizResultModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

impl PostgresService {
    pub async fn create_quiz_result(&self, record: &QuizResultRecord) -> Result<QuizResultModel, AppError> {
        Ok(ResultActive {
            id: Set(Uuid::new_v4()),
            user_id: Set(record.user_id),
            company_id: Set(record.company_id),
            quiz_id: Set(record.quiz_id),
            time: Set(record.time),
            answered: Set(record.answered),
            correct: Set(record.correct),
        }
        .insert(&self.database_connection)
        .await?)
    }

    /// A user's attempts, optionally limited to one company, oldest first.
    pub async fn list_user_results(&self, user_id: Uuid, company_id: Option<Uuid>) -> Result<Vec<QuizResultModel>, AppError> {
        let mut finder = QuizResult::find().filter(Column::UserId.eq(user_id));
        if let Some(company_id) = company_id {
            finder = finder.filter(Column::CompanyId.eq(company_id));
        }
        Ok(finder.order_by_asc(Column::Time).all(&self.database_connection).await?)
    }

    pub async fn list_company_results(&self, company_id: Uuid) -> Result<Vec<QuizResultModel>, AppError> {
        Ok(QuizResult::find()
            .filter(Column::CompanyId.eq(company_id))
            .order_by_asc(Column::Time)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn last_attempt(&self, user_id: Uuid, quiz_id: Uuid) -> Result<Option<DateTime<Utc>>, AppError> {
        Ok(QuizResult::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::QuizId.eq(quiz_id))
            .order_by_desc(Column::Time)
            .one(&self.database_connection)
            .await?
            .map(|r| r.time))
    }
}
