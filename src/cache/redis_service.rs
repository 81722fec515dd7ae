use deadpool_redis::{Config, Pool, Runtime};
use redis::AsyncCommands;
use tracing::{info, warn};
use uuid::Uuid;

use crate::types::{error::AppError, quiz_result::QuizResultRecord};

/// Cached quiz results live for 48 hours.
pub const RESULT_TTL_SECS: u64 = 48 * 60 * 60;
const SCAN_BATCH: usize = 200;

/// Key filters over `quiz_result:{user}:{company}:{quiz}:{time}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultFilter {
    User(Uuid),
    UserInCompany { user_id: Uuid, company_id: Uuid },
    Company(Uuid),
    Quiz(Uuid),
}

impl ResultFilter {
    pub fn pattern(&self) -> String {
        match self {
            ResultFilter::User(u) => format!("quiz_result:{}:*", u),
            ResultFilter::UserInCompany { user_id, company_id } => {
                format!("quiz_result:{}:{}:*", user_id, company_id)
            }
            ResultFilter::Company(c) => format!("quiz_result:*:{}:*", c),
            ResultFilter::Quiz(q) => format!("quiz_result:*:*:{}:*", q),
        }
    }
}

pub fn result_key(record: &QuizResultRecord) -> String {
    format!(
        "quiz_result:{}:{}:{}:{}",
        record.user_id,
        record.company_id,
        record.quiz_id,
        record.time.timestamp_micros()
    )
}

pub struct RedisService {
    pub(crate) pool: Pool,
}

impl RedisService {
    pub fn new(url: &str) -> Result<Self, AppError> {
        info!("Creating Redis pool...");
        let pool = Config::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| AppError::Cache(e.to_string()))?;
        Ok(Self { pool })
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.pool.get().await?;
        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        if pong != "PONG" {
            return Err(AppError::Cache(format!("unexpected PING reply {}", pong)));
        }
        Ok(())
    }

    pub async fn cache_quiz_result(&self, record: &QuizResultRecord) -> Result<(), AppError> {
        let mut conn = self.pool.get().await?;
        let json = serde_json::to_string(record).map_err(|e| AppError::Internal(e.to_string()))?;
        let _: () = conn.set_ex(result_key(record), json, RESULT_TTL_SECS).await?;
        Ok(())
    }

    async fn scan_keys(&self, pattern: &str) -> Result<Vec<String>, AppError> {
        let mut conn = self.pool.get().await?;
        let mut keys = Vec::new();
        let mut cursor: u64 = 0;
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await?;
            keys.extend(batch);
            if next == 0 {
                break;
            }
            cursor = next;
        }
        Ok(keys)
    }

    /// Cached results matching the filter, oldest first. Keys that expire
    /// between the scan and the read are skipped.
    pub async fn get_quiz_results(&self, filter: ResultFilter) -> Result<Vec<QuizResultRecord>, AppError> {
        let keys = self.scan_keys(&filter.pattern()).await?;
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.pool.get().await?;
        let values: Vec<Option<String>> = conn.mget(&keys).await?;

        let mut records: Vec<QuizResultRecord> = values
            .into_iter()
            .flatten()
            .filter_map(|raw| match serde_json::from_str(&raw) {
                Ok(r) => Some(r),
                Err(e) => {
                    warn!("Skipping malformed cached result: {}", e);
                    None
                }
            })
            .collect();
        records.sort_by_key(|r| r.time);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn key_layout_matches_filters() {
        let record = QuizResultRecord {
            user_id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            quiz_id: Uuid::new_v4(),
            time: Utc::now(),
            answered: 2,
            correct: 1,
        };
        let key = result_key(&record);
        assert!(key.starts_with(&format!("quiz_result:{}:{}:{}:", record.user_id, record.company_id, record.quiz_id)));

        let user = ResultFilter::User(record.user_id).pattern();
        assert_eq!(user, format!("quiz_result:{}:*", record.user_id));
        let quiz = ResultFilter::Quiz(record.quiz_id).pattern();
        assert_eq!(quiz, format!("quiz_result:*:*:{}:*", record.quiz_id));
        let company = ResultFilter::Company(record.company_id).pattern();
        assert_eq!(company, format!("quiz_result:*:{}:*", record.company_id));
    }
}
