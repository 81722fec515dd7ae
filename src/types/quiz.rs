use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::error::AppError;

pub const MIN_QUESTIONS: usize = 2;
pub const MIN_OPTIONS: usize = 2;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub question: String,
    /// Option number -> option text.
    pub options: BTreeMap<i32, String>,
    pub correct: Vec<i32>,
}

impl Question {
    pub fn check(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("Question text must not be empty.".to_string());
        }
        if self.options.len() < MIN_OPTIONS {
            return Err(format!("Question {:?} needs at least {} options.", self.question, MIN_OPTIONS));
        }
        let unique: HashSet<&str> = self.options.values().map(|o| o.as_str()).collect();
        if unique.len() != self.options.len() {
            return Err(format!("Question {:?} has duplicate options.", self.question));
        }

        let correct: BTreeSet<i32> = self.correct.iter().copied().collect();
        if correct.is_empty() {
            return Err("There must be at least one correct answer.".to_string());
        }
        if correct.len() > self.options.len() {
            return Err("There can't be more correct options than options in general.".to_string());
        }
        if correct.len() == self.options.len() {
            return Err("There must be at least one incorrect answer.".to_string());
        }
        if let Some(missing) = correct.iter().find(|c| !self.options.contains_key(c)) {
            return Err(format!("Correct option {} is not one of the options.", missing));
        }
        Ok(())
    }

    /// Selections are compared as sets, order and repeats do not matter.
    pub fn is_answered_by(&self, selection: &[i32]) -> bool {
        let expected: BTreeSet<i32> = self.correct.iter().copied().collect();
        let given: BTreeSet<i32> = selection.iter().copied().collect();
        expected == given
    }
}

pub fn check_questions(questions: &[Question]) -> Result<(), AppError> {
    if questions.len() < MIN_QUESTIONS {
        return Err(AppError::Validation(format!(
            "A quiz needs at least {} questions.",
            MIN_QUESTIONS
        )));
    }
    questions
        .iter()
        .try_for_each(Question::check)
        .map_err(AppError::Validation)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub answered: i32,
    pub correct: i32,
}

/// One selection list per question, in question order.
pub fn score(questions: &[Question], answers: &[Vec<i32>]) -> Result<Score, AppError> {
    if answers.len() < questions.len() {
        return Err(AppError::Unprocessable(format!(
            "Quiz is incomplete: {} of {} questions answered.",
            answers.len(),
            questions.len()
        )));
    }
    if answers.len() > questions.len() {
        return Err(AppError::Unprocessable(format!(
            "Got {} answers for {} questions.",
            answers.len(),
            questions.len()
        )));
    }
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(q, a)| q.is_answered_by(a))
        .count();
    Ok(Score { answered: answers.len() as i32, correct: correct as i32 })
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct RQuizCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1))]
    pub frequency: i32,
    pub questions: Vec<Question>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct RQuizUpdate {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub frequency: Option<i32>,
    pub questions: Option<Vec<Question>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(transparent)]
pub struct RQuizAnswers(pub Vec<Vec<i32>>);

pub fn parse_questions(raw: &serde_json::Value) -> Result<Vec<Question>, AppError> {
    serde_json::from_value(raw.clone())
        .map_err(|e| AppError::Internal(format!("stored quiz questions are malformed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: &[(i32, &str)], correct: &[i32]) -> Question {
        Question {
            question: "Which?".to_string(),
            options: options.iter().map(|(k, v)| (*k, v.to_string())).collect(),
            correct: correct.to_vec(),
        }
    }

    fn two_questions() -> Vec<Question> {
        vec![
            question(&[(1, "a"), (2, "b"), (3, "c")], &[1]),
            question(&[(1, "yes"), (2, "no")], &[2]),
        ]
    }

    #[test]
    fn accepts_well_formed_quiz() {
        assert!(check_questions(&two_questions()).is_ok());
    }

    #[test]
    fn rejects_single_question() {
        let mut qs = two_questions();
        qs.pop();
        assert!(matches!(check_questions(&qs), Err(AppError::Validation(_))));
    }

    #[test]
    fn rejects_bad_options() {
        assert!(question(&[(1, "a")], &[1]).check().is_err());
        assert!(question(&[(1, "a"), (2, "a")], &[1]).check().is_err());
    }

    #[test]
    fn rejects_bad_correct_sets() {
        assert!(question(&[(1, "a"), (2, "b")], &[]).check().is_err());
        assert!(question(&[(1, "a"), (2, "b")], &[1, 2]).check().is_err());
        assert!(question(&[(1, "a"), (2, "b")], &[3]).check().is_err());
    }

    #[test]
    fn options_keys_deserialize_from_json_strings() {
        let raw = serde_json::json!({"question": "q", "options": {"1": "a", "2": "b"}, "correct": [2]});
        let q: Question = serde_json::from_value(raw).unwrap();
        assert_eq!(q.options.get(&2).map(String::as_str), Some("b"));
    }

    #[test]
    fn scores_by_set_equality() {
        let mut qs = two_questions();
        qs[0].correct = vec![1, 3];
        let s = score(&qs, &[vec![3, 1], vec![1]]).unwrap();
        assert_eq!(s, Score { answered: 2, correct: 1 });
    }

    #[test]
    fn incomplete_answers_are_unprocessable() {
        let err = score(&two_questions(), &[vec![1]]).unwrap_err();
        assert!(matches!(err, AppError::Unprocessable(_)));
    }
}
