use crate::types::{error::AppError, quiz_result::QuizResultRecord};

/// Header row plus one row per record, columns in field order.
pub fn results_to_csv(records: &[QuizResultRecord]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if records.is_empty() {
        writer
            .write_record(["user_id", "company_id", "quiz_id", "time", "answered", "correct"])
            .map_err(|e| AppError::Internal(e.to_string()))?;
    }
    for record in records {
        writer.serialize(record).map_err(|e| AppError::Internal(e.to_string()))?;
    }
    let bytes = writer.into_inner().map_err(|e| AppError::Internal(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(e.to_string()))
}
