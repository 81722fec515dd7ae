use std::collections::BTreeMap;

use entity::quiz_result::Model as QuizResultModel;
use uuid::Uuid;

use crate::types::error::AppError;
use crate::types::quiz_result::{DynamicsPoint, LatestAnswer};

/// Total correct over total answered. `None` when there is nothing to rate.
pub fn rating(results: &[QuizResultModel]) -> Option<f64> {
    if results.is_empty() {
        return None;
    }
    let answered: i64 = results.iter().map(|r| r.answered as i64).sum();
    let correct: i64 = results.iter().map(|r| r.correct as i64).sum();
    Some(if answered > 0 { correct as f64 / answered as f64 } else { 0.0 })
}

pub fn require_rating(results: &[QuizResultModel]) -> Result<f64, AppError> {
    rating(results).ok_or_else(|| AppError::NotFound("Results not found".to_string()))
}

/// Cumulative rating after each attempt, oldest first.
pub fn dynamics(results: &[QuizResultModel]) -> Vec<DynamicsPoint> {
    let mut ordered: Vec<&QuizResultModel> = results.iter().collect();
    ordered.sort_by_key(|r| r.time);

    let (mut answered, mut correct) = (0i64, 0i64);
    ordered
        .into_iter()
        .map(|r| {
            answered += r.answered as i64;
            correct += r.correct as i64;
            DynamicsPoint {
                time: r.time,
                rating: if answered > 0 { correct as f64 / answered as f64 } else { 0.0 },
            }
        })
        .collect()
}

/// Most recent attempt per quiz, newest first.
pub fn latest_answers(results: &[QuizResultModel]) -> Vec<LatestAnswer> {
    let mut latest: BTreeMap<Uuid, chrono::DateTime<chrono::Utc>> = BTreeMap::new();
    for r in results {
        latest
            .entry(r.quiz_id)
            .and_modify(|t| {
                if r.time > *t {
                    *t = r.time
                }
            })
            .or_insert(r.time);
    }
    let mut out: Vec<LatestAnswer> = latest
        .into_iter()
        .map(|(quiz_id, time)| LatestAnswer { quiz_id, time })
        .collect();
    out.sort_by(|a, b| b.time.cmp(&a.time));
    out
}

pub fn group_by_user(results: Vec<QuizResultModel>) -> BTreeMap<Uuid, Vec<QuizResultModel>> {
    let mut grouped: BTreeMap<Uuid, Vec<QuizResultModel>> = BTreeMap::new();
    for r in results {
        grouped.entry(r.user_id).or_default().push(r);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn result(user: Uuid, quiz: Uuid, minutes: i64, answered: i32, correct: i32) -> QuizResultModel {
        QuizResultModel {
            id: Uuid::new_v4(),
            user_id: user,
            company_id: Uuid::nil(),
            quiz_id: quiz,
            time: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes),
            answered,
            correct,
        }
    }

    #[test]
    fn rating_sums_before_dividing() {
        let u = Uuid::new_v4();
        let q = Uuid::new_v4();
        let rs = vec![result(u, q, 0, 2, 2), result(u, q, 1, 8, 2)];
        assert_eq!(rating(&rs), Some(0.4));
    }

    #[test]
    fn empty_results_have_no_rating() {
        assert_eq!(rating(&[]), None);
        assert!(matches!(require_rating(&[]), Err(AppError::NotFound(_))));
    }

    #[test]
    fn zero_answered_rates_zero() {
        let rs = vec![result(Uuid::nil(), Uuid::nil(), 0, 0, 0)];
        assert_eq!(rating(&rs), Some(0.0));
    }

    #[test]
    fn dynamics_is_cumulative_in_time_order() {
        let u = Uuid::new_v4();
        let q = Uuid::new_v4();
        let rs = vec![result(u, q, 10, 2, 0), result(u, q, 0, 2, 2)];
        let points = dynamics(&rs);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].rating, 1.0);
        assert_eq!(points[1].rating, 0.5);
        assert!(points[0].time < points[1].time);
    }

    #[test]
    fn latest_answer_per_quiz() {
        let u = Uuid::new_v4();
        let (q1, q2) = (Uuid::new_v4(), Uuid::new_v4());
        let rs = vec![result(u, q1, 0, 2, 1), result(u, q1, 30, 2, 1), result(u, q2, 5, 2, 2)];
        let latest = latest_answers(&rs);
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].quiz_id, q1);
        assert_eq!(latest[0].time, rs[1].time);
        assert_eq!(latest[1].quiz_id, q2);
    }

    #[test]
    fn groups_by_user() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let q = Uuid::new_v4();
        let grouped = group_by_user(vec![result(a, q, 0, 1, 1), result(b, q, 0, 1, 0), result(a, q, 1, 1, 0)]);
        assert_eq!(grouped[&a].len(), 2);
        assert_eq!(grouped[&b].len(), 1);
    }
}
