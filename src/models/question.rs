//! Question and answer data models
//!
//! Both records validate their inputs on construction and cannot be
//! modified afterwards. Deserialization goes through the same checks.

use crate::{QuizError, Result};
use serde::{Deserialize, Serialize};

/// A candidate answer to a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SolutionRecord")]
pub struct Solution {
    text: String,
    is_correct: bool,
}

/// Unvalidated wire form of a [`Solution`]
#[derive(Deserialize)]
struct SolutionRecord {
    text: String,
    #[serde(default)]
    is_correct: bool,
}

impl TryFrom<SolutionRecord> for Solution {
    type Error = QuizError;

    fn try_from(record: SolutionRecord) -> Result<Self> {
        Solution::new(record.text, record.is_correct)
    }
}

impl Solution {
    /// Create a solution, rejecting empty text
    pub fn new(text: impl Into<String>, is_correct: bool) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuizError::Validation(
                "Solution text must not be empty".to_string(),
            ));
        }

        Ok(Self { text, is_correct })
    }

    /// Shorthand for a correct solution
    pub fn correct(text: impl Into<String>) -> Result<Self> {
        Self::new(text, true)
    }

    /// Shorthand for an incorrect solution
    pub fn incorrect(text: impl Into<String>) -> Result<Self> {
        Self::new(text, false)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// A quiz question with its ordered candidate answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    text: String,
    solutions: Vec<Solution>,
    score: u32,
}

/// Unvalidated wire form of a [`Question`]
#[derive(Deserialize)]
struct QuestionRecord {
    text: String,
    #[serde(default)]
    solutions: Vec<Solution>,
    #[serde(default)]
    score: i64,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuizError;

    fn try_from(record: QuestionRecord) -> Result<Self> {
        Question::new(record.text, record.solutions, record.score)
    }
}

impl Question {
    /// Create a question.
    ///
    /// Fails when the text is empty, there are no solutions, or the score is
    /// negative (or does not fit in a `u32`).
    pub fn new(text: impl Into<String>, solutions: Vec<Solution>, score: i64) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuizError::Validation(
                "Question text must not be empty".to_string(),
            ));
        }

        if solutions.is_empty() {
            return Err(QuizError::Validation(format!(
                "Question '{}' must have at least one solution",
                text
            )));
        }

        let score = u32::try_from(score).map_err(|_| {
            QuizError::Validation(format!(
                "Question '{}' has an invalid score: {} (must be between 0 and {})",
                text,
                score,
                u32::MAX
            ))
        })?;

        Ok(Self {
            text,
            solutions,
            score,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Candidate answers in display order
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Get a solution by its display position
    pub fn solution(&self, index: usize) -> Option<&Solution> {
        self.solutions.get(index)
    }

    /// Points awarded for a correct answer
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Iterate over the solutions marked correct
    pub fn correct_solutions(&self) -> impl Iterator<Item = &Solution> {
        self.solutions.iter().filter(|s| s.is_correct())
    }
}

/// Sum of the scores of `questions`, or `None` if it does not fit in a `u32`
pub fn total_score(questions: &[Question]) -> Option<u32> {
    questions
        .iter()
        .try_fold(0u32, |total, q| total.checked_add(q.score()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> Vec<Solution> {
        vec![
            Solution::incorrect("1").unwrap(),
            Solution::correct("2").unwrap(),
        ]
    }

    #[test]
    fn test_solution_rejects_empty_text() {
        for text in ["", "   ", "\t\n"] {
            let result = Solution::new(text, true);
            assert!(matches!(result, Err(QuizError::Validation(_))), "{:?}", text);
        }
    }

    #[test]
    fn test_solution_accessors() {
        let solution = Solution::correct("2").unwrap();
        assert_eq!(solution.text(), "2");
        assert!(solution.is_correct());
        assert!(!Solution::incorrect("3").unwrap().is_correct());
    }

    #[test]
    fn test_question_rejects_empty_solutions() {
        let result = Question::new("What is 1 + 1?", Vec::new(), 100);
        assert!(matches!(result, Err(QuizError::Validation(_))));
    }

    #[test]
    fn test_question_rejects_negative_score() {
        let result = Question::new("What is 1 + 1?", answers(), -1);
        assert!(matches!(result, Err(QuizError::Validation(_))));

        let result = Question::new("What is 1 + 1?", answers(), i64::from(u32::MAX) + 1);
        assert!(matches!(result, Err(QuizError::Validation(_))));
    }

    #[test]
    fn test_question_rejects_empty_text() {
        let result = Question::new(" ", answers(), 100);
        assert!(matches!(result, Err(QuizError::Validation(_))));
    }

    #[test]
    fn test_question_keeps_solution_order() {
        let question = Question::new("What is 1 + 1?", answers(), 0).unwrap();
        let texts: Vec<&str> = question.solutions().iter().map(|s| s.text()).collect();
        assert_eq!(texts, vec!["1", "2"]);
        assert_eq!(question.score(), 0);
        assert_eq!(question.solution(1).map(|s| s.text()), Some("2"));
        assert!(question.solution(2).is_none());
        assert_eq!(question.correct_solutions().count(), 1);
    }

    #[test]
    fn test_total_score() {
        let question = |score| Question::new("Q", answers(), score).unwrap();
        assert_eq!(total_score(&[question(100), question(250)]), Some(350));
        assert_eq!(total_score(&[]), Some(0));

        let max = i64::from(u32::MAX);
        assert_eq!(total_score(&[question(max), question(0)]), Some(u32::MAX));
        assert_eq!(total_score(&[question(max), question(1)]), None);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Question = serde_json::from_str(
            r#"{"text":"Q","score":5,"solutions":[{"text":"a","is_correct":true}]}"#,
        )
        .unwrap();
        assert_eq!(ok.score(), 5);

        let empty_answer = serde_json::from_str::<Question>(
            r#"{"text":"Q","score":5,"solutions":[{"text":""}]}"#,
        );
        assert!(empty_answer.is_err());

        let negative = serde_json::from_str::<Question>(
            r#"{"text":"Q","score":-5,"solutions":[{"text":"a"}]}"#,
        );
        assert!(negative.is_err());
    }
}
