use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use cron::Schedule;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;

/// Every day at midnight UTC.
pub const DAILY_AT_MIDNIGHT: &str = "0 0 0 * * * *";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reminder {
    NeverTaken,
    Overdue,
}

impl Reminder {
    pub fn text(self, quiz_id: Uuid, company_id: Uuid) -> String {
        match self {
            Reminder::NeverTaken => format!(
                "You haven't ever taken quiz {} from company {}. Please take it.",
                quiz_id, company_id
            ),
            Reminder::Overdue => format!(
                "You haven't taken quiz {} from company {} in a long time. Please take it.",
                quiz_id, company_id
            ),
        }
    }
}

pub fn reminder_for(
    last_attempt: Option<DateTime<Utc>>,
    frequency_days: i32,
    now: DateTime<Utc>,
) -> Option<Reminder> {
    match last_attempt {
        None => Some(Reminder::NeverTaken),
        Some(t) if (now - t).num_days() >= frequency_days as i64 => Some(Reminder::Overdue),
        Some(_) => None,
    }
}

/// Outcome of one reminder pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReminderRun {
    pub sent: usize,
    pub failed: usize,
}

/// Walks every company, participant and quiz once and writes the due
/// reminders. Lookup errors abort the pass; a failed insert is logged and
/// skipped.
pub async fn send_reminders(db: &PostgresService, now: DateTime<Utc>) -> Result<ReminderRun, AppError> {
    let mut pending = Vec::new();
    for company in db.list_all_companies().await? {
        let quizzes = db.list_all_quizzes(company.id).await?;
        if quizzes.is_empty() {
            continue;
        }
        for user_id in db.list_participant_ids(company.id).await? {
            for quiz in &quizzes {
                let last = db.last_attempt(user_id, quiz.id).await?;
                if let Some(reminder) = reminder_for(last, quiz.frequency, now) {
                    pending.push((user_id, reminder.text(quiz.id, company.id)));
                }
            }
        }
    }
    Ok(deliver(db, pending).await)
}

/// Writes each notification independently.
pub async fn deliver(db: &PostgresService, pending: Vec<(Uuid, String)>) -> ReminderRun {
    let mut run = ReminderRun::default();
    for (user_id, text) in pending {
        match db.create_notification(user_id, text).await {
            Ok(_) => run.sent += 1,
            Err(e) => {
                warn!(%user_id, "Failed to write reminder: {}", e);
                run.failed += 1;
            }
        }
    }
    run
}

pub fn spawn_daily_reminders(db: Arc<PostgresService>) -> Result<(), cron::error::Error> {
    let schedule = Schedule::from_str(DAILY_AT_MIDNIGHT)?;

    actix_web::rt::spawn(async move {
        loop {
            let Some(next) = schedule.upcoming(Utc).next() else {
                warn!("Reminder schedule has no upcoming runs, stopping");
                break;
            };
            let wait = (next - Utc::now()).to_std().unwrap_or_default();
            tokio::time::sleep(wait).await;

            match send_reminders(&db, Utc::now()).await {
                Ok(run) => info!(sent = run.sent, failed = run.failed, "Daily quiz reminders sent"),
                Err(e) => error!("Daily quiz reminders failed: {}", e),
            }
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Timelike};

    #[test]
    fn never_taken() {
        assert_eq!(reminder_for(None, 3, Utc::now()), Some(Reminder::NeverTaken));
    }

    #[test]
    fn overdue_at_frequency_boundary() {
        let now = Utc::now();
        assert_eq!(reminder_for(Some(now - Duration::days(3)), 3, now), Some(Reminder::Overdue));
        assert_eq!(reminder_for(Some(now - Duration::days(2)), 3, now), None);
    }

    #[test]
    fn texts_name_quiz_and_company() {
        let (q, c) = (Uuid::new_v4(), Uuid::new_v4());
        let text = Reminder::NeverTaken.text(q, c);
        assert!(text.contains(&q.to_string()) && text.contains(&c.to_string()));
        assert!(Reminder::Overdue.text(q, c).contains("in a long time"));
    }

    #[test]
    fn schedule_fires_at_midnight() {
        let schedule = Schedule::from_str(DAILY_AT_MIDNIGHT).unwrap();
        let next = schedule.upcoming(Utc).next().unwrap();
        assert_eq!((next.hour(), next.minute(), next.second()), (0, 0, 0));
    }
}
