//! Built-in question set used when no question bank is configured

use crate::models::{Question, Solution};
use crate::Result;

/// Points awarded for each sample question
pub const SAMPLE_SCORE: i64 = 100;

const SAMPLE_SET: [(&str, [(&str, bool); 4]); 4] = [
    (
        "What is 1 + 1?",
        [("1", false), ("2", true), ("3", false), ("4", false)],
    ),
    (
        "What is the derivative of x^2?",
        [("x", false), ("2x", true), ("x^2 / 2", false), ("2", false)],
    ),
    (
        "What is the capital of Japan?",
        [("Osaka", false), ("Kyoto", false), ("Tokyo", true), ("Nagoya", false)],
    ),
    (
        "Which of these numbers is prime?",
        [("21", false), ("27", false), ("29", true), ("33", false)],
    ),
];

/// The fixed, ordered sample questions
pub fn sample_questions() -> Result<Vec<Question>> {
    SAMPLE_SET
        .iter()
        .map(|(text, answers)| {
            let solutions = answers
                .iter()
                .map(|(answer, correct)| Solution::new(*answer, *correct))
                .collect::<Result<Vec<_>>>()?;
            Question::new(*text, solutions, SAMPLE_SCORE)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_set_shape() {
        let questions = sample_questions().unwrap();
        assert_eq!(questions.len(), 4);
        assert_eq!(questions[0].text(), "What is 1 + 1?");
        for question in &questions {
            assert_eq!(question.solutions().len(), 4);
            assert_eq!(question.score(), 100);
            assert_eq!(question.correct_solutions().count(), 1);
        }
    }

    #[test]
    fn test_first_question_answer() {
        let questions = sample_questions().unwrap();
        let correct = questions[0].correct_solutions().next().unwrap();
        assert_eq!(correct.text(), "2");
    }
}
