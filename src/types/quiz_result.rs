use chrono::{DateTime, Utc};
use entity::quiz_result::Model as QuizResultModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A quiz attempt as it is cached and exported.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizResultRecord {
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub quiz_id: Uuid,
    pub time: DateTime<Utc>,
    pub answered: i32,
    pub correct: i32,
}

impl From<&QuizResultModel> for QuizResultRecord {
    fn from(m: &QuizResultModel) -> Self {
        QuizResultRecord {
            user_id: m.user_id,
            company_id: m.company_id,
            quiz_id: m.quiz_id,
            time: m.time,
            answered: m.answered,
            correct: m.correct,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RatingRes {
    pub rating: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DynamicsPoint {
    pub time: DateTime<Utc>,
    pub rating: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LatestAnswer {
    pub quiz_id: Uuid,
    pub time: DateTime<Utc>,
}

#[derive(Serialize, Debug)]
pub struct UserDynamics {
    pub user_id: Uuid,
    pub dynamics: Vec<DynamicsPoint>,
}

#[derive(Serialize, Debug)]
pub struct UserLatestAnswers {
    pub user_id: Uuid,
    pub latest_answers: Vec<LatestAnswer>,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Deserialize, Debug, Default)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: ExportFormat,
}
