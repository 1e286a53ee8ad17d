//! Game controller
//!
//! Owns the progression state (current question and accumulated score) and
//! tells the view which screen to show in response to bus events.

use crate::app::view::ViewCommand;
use crate::events::Listener;
use crate::models::{total_score, Event, EventKind, Question, Solution};
use crate::{QuizError, Result};
use chrono::{DateTime, Utc};
use std::sync::mpsc::Sender;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Progression through the question set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Progress {
    /// Waiting for the first start
    #[default]
    NotStarted,
    /// Playing; `index` is the question currently on screen
    InProgress { index: usize, score: u32 },
    /// Every question has been answered
    Finished { score: u32 },
}

/// Outcome of a completed game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    /// Points earned
    pub score: u32,
    /// Points available across the whole set
    pub max_score: u32,
    /// Number of questions in the set
    pub questions: usize,
    /// When the game was started
    pub started_at: DateTime<Utc>,
    /// When the last answer was given
    pub finished_at: DateTime<Utc>,
}

impl GameSummary {
    /// Wall-clock time spent playing
    pub fn elapsed(&self) -> Duration {
        (self.finished_at - self.started_at)
            .to_std()
            .unwrap_or_default()
    }
}

/// Game controller, registered as a listener on the event bus
#[derive(Debug)]
pub struct Controller {
    questions: Vec<Question>,
    max_score: u32,
    progress: Progress,
    started_at: DateTime<Utc>,
    view: Sender<ViewCommand>,
}

impl Controller {
    /// Create a controller that has not started yet
    pub fn new(questions: Vec<Question>, view: Sender<ViewCommand>) -> Result<Self> {
        Self::with_progress(questions, Progress::NotStarted, view)
    }

    /// Create a controller resuming from `progress`.
    ///
    /// Fails when the set is empty, the scores of all questions do not sum
    /// to a `u32`, or `progress` points past the set or above the maximum
    /// score.
    pub fn with_progress(
        questions: Vec<Question>,
        progress: Progress,
        view: Sender<ViewCommand>,
    ) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::Validation(
                "The question set must contain at least one question".to_string(),
            ));
        }

        let max_score = total_score(&questions).ok_or_else(|| {
            QuizError::Validation(format!(
                "Total score of the question set exceeds {}",
                u32::MAX
            ))
        })?;

        let score = match progress {
            Progress::NotStarted => 0,
            Progress::InProgress { index, score } => {
                if index >= questions.len() {
                    return Err(QuizError::Validation(format!(
                        "Question index {} is out of range ({} questions)",
                        index,
                        questions.len()
                    )));
                }
                score
            }
            Progress::Finished { score } => score,
        };
        if score > max_score {
            return Err(QuizError::Validation(format!(
                "Score {} is above the maximum of {}",
                score, max_score
            )));
        }

        Ok(Self {
            questions,
            max_score,
            progress,
            started_at: Utc::now(),
            view,
        })
    }

    /// Current progression state
    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Sum of every question's score
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Handle a start request
    pub fn start(&mut self) -> Result<()> {
        match self.progress {
            Progress::InProgress { index, .. } => {
                warn!(index, "start requested while a game is in progress, ignoring");
                Ok(())
            }
            Progress::NotStarted | Progress::Finished { .. } => {
                info!(questions = self.questions.len(), "starting new game");
                self.progress = Progress::InProgress { index: 0, score: 0 };
                self.started_at = Utc::now();
                self.show_question(0, 0)
            }
        }
    }

    /// Handle an answer to the question currently on screen
    pub fn answer(&mut self, selected: &Solution) -> Result<()> {
        let (index, score) = match self.progress {
            Progress::InProgress { index, score } => (index, score),
            other => {
                return Err(QuizError::Progression(format!(
                    "Answer '{}' received while game is {:?}",
                    selected.text(),
                    other
                )))
            }
        };

        let question = &self.questions[index];
        let score = if selected.is_correct() {
            score.checked_add(question.score()).ok_or_else(|| {
                QuizError::Progression(format!(
                    "Score overflow adding {} to {}",
                    question.score(),
                    score
                ))
            })?
        } else {
            score
        };
        debug!(
            index,
            answer = selected.text(),
            correct = selected.is_correct(),
            score,
            "answer recorded"
        );

        let next = index + 1;
        if next < self.questions.len() {
            self.progress = Progress::InProgress { index: next, score };
            self.show_question(next, score)
        } else {
            self.progress = Progress::Finished { score };
            let summary = GameSummary {
                score,
                max_score: self.max_score,
                questions: self.questions.len(),
                started_at: self.started_at,
                finished_at: Utc::now(),
            };
            info!(score, max_score = summary.max_score, "game finished");
            self.send(ViewCommand::ShowFinished(summary))
        }
    }

    fn show_question(&self, index: usize, score: u32) -> Result<()> {
        self.send(ViewCommand::ShowQuestion {
            question: self.questions[index].clone(),
            number: index + 1,
            total: self.questions.len(),
            score,
        })
    }

    fn send(&self, command: ViewCommand) -> Result<()> {
        self.view
            .send(command)
            .map_err(|_| QuizError::ViewDisconnected)
    }
}

impl Listener for Controller {
    fn on_event(&mut self, event: &Event) -> Result<()> {
        match event.kind() {
            EventKind::StartClicked => self.start(),
            EventKind::Answer => {
                let selected = event.selected_solution().ok_or_else(|| {
                    QuizError::Validation(
                        "An answer event requires a selected solution".to_string(),
                    )
                })?;
                self.answer(selected)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::sample_questions;
    use std::sync::mpsc::{self, Receiver};

    fn controller_at(progress: Progress) -> (Controller, Receiver<ViewCommand>) {
        let (tx, rx) = mpsc::channel();
        let controller = Controller::with_progress(sample_questions().unwrap(), progress, tx)
            .expect("valid controller");
        (controller, rx)
    }

    fn shown_question(rx: &Receiver<ViewCommand>) -> (String, usize, u32) {
        match rx.try_recv().expect("a view command") {
            ViewCommand::ShowQuestion {
                question,
                number,
                score,
                ..
            } => (question.text().to_string(), number, score),
            other => panic!("expected ShowQuestion, got {:?}", other),
        }
    }

    #[test]
    fn test_start_shows_first_question() {
        let (mut controller, rx) = controller_at(Progress::NotStarted);
        controller.on_event(&Event::start_clicked()).unwrap();

        assert_eq!(
            controller.progress(),
            Progress::InProgress { index: 0, score: 0 }
        );
        let (text, number, score) = shown_question(&rx);
        assert_eq!(text, "What is 1 + 1?");
        assert_eq!(number, 1);
        assert_eq!(score, 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_correct_answer_advances_and_scores() {
        let (mut controller, rx) = controller_at(Progress::InProgress { index: 0, score: 0 });
        let event = Event::answer(Solution::correct("2").unwrap());
        controller.on_event(&event).unwrap();

        assert_eq!(
            controller.progress(),
            Progress::InProgress {
                index: 1,
                score: 100
            }
        );
        let (text, number, score) = shown_question(&rx);
        assert_eq!(text, "What is the derivative of x^2?");
        assert_eq!(number, 2);
        assert_eq!(score, 100);
    }

    #[test]
    fn test_incorrect_answer_keeps_score() {
        let (mut controller, rx) = controller_at(Progress::InProgress {
            index: 1,
            score: 100,
        });
        controller
            .on_event(&Event::answer(Solution::incorrect("x").unwrap()))
            .unwrap();

        assert_eq!(
            controller.progress(),
            Progress::InProgress {
                index: 2,
                score: 100
            }
        );
        let (_, number, _) = shown_question(&rx);
        assert_eq!(number, 3);
    }

    #[test]
    fn test_last_answer_finishes() {
        let (mut controller, rx) = controller_at(Progress::InProgress {
            index: 3,
            score: 300,
        });
        controller
            .on_event(&Event::answer(Solution::correct("29").unwrap()))
            .unwrap();

        assert_eq!(controller.progress(), Progress::Finished { score: 400 });
        match rx.try_recv().unwrap() {
            ViewCommand::ShowFinished(summary) => {
                assert_eq!(summary.score, 400);
                assert_eq!(summary.max_score, 400);
                assert_eq!(summary.questions, 4);
                assert!(summary.finished_at >= summary.started_at);
            }
            other => panic!("expected ShowFinished, got {:?}", other),
        }
    }

    #[test]
    fn test_answer_before_start_is_rejected() {
        let (mut controller, rx) = controller_at(Progress::NotStarted);
        let result = controller.on_event(&Event::answer(Solution::correct("2").unwrap()));
        assert!(matches!(result, Err(QuizError::Progression(_))));
        assert_eq!(controller.progress(), Progress::NotStarted);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_start_while_in_progress_is_ignored() {
        let (mut controller, rx) = controller_at(Progress::InProgress {
            index: 2,
            score: 100,
        });
        controller.on_event(&Event::start_clicked()).unwrap();
        assert_eq!(
            controller.progress(),
            Progress::InProgress {
                index: 2,
                score: 100
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_restart_after_finish() {
        let (mut controller, rx) = controller_at(Progress::Finished { score: 400 });
        controller.on_event(&Event::start_clicked()).unwrap();
        assert_eq!(
            controller.progress(),
            Progress::InProgress { index: 0, score: 0 }
        );
        let (text, _, _) = shown_question(&rx);
        assert_eq!(text, "What is 1 + 1?");
    }

    #[test]
    fn test_invalid_construction() {
        let (tx, _rx) = mpsc::channel();
        assert!(Controller::new(Vec::new(), tx.clone()).is_err());
        let out_of_range = Controller::with_progress(
            sample_questions().unwrap(),
            Progress::InProgress { index: 4, score: 0 },
            tx,
        );
        assert!(matches!(out_of_range, Err(QuizError::Validation(_))));
    }

    #[test]
    fn test_dropped_view_is_reported() {
        let (mut controller, rx) = controller_at(Progress::NotStarted);
        drop(rx);
        let result = controller.on_event(&Event::start_clicked());
        assert!(matches!(result, Err(QuizError::ViewDisconnected)));
    }

    fn question_worth(score: i64) -> Question {
        Question::new("Pick a", vec![Solution::correct("a").unwrap()], score).unwrap()
    }

    #[test]
    fn test_resumed_game_summary_agrees_with_score() {
        let (mut controller, rx) = controller_at(Progress::InProgress {
            index: 3,
            score: 300,
        });
        controller
            .on_event(&Event::answer(Solution::correct("29").unwrap()))
            .unwrap();

        match rx.try_recv().unwrap() {
            ViewCommand::ShowFinished(summary) => {
                assert_eq!(
                    (summary.score, summary.max_score, summary.questions),
                    (400, 400, 4)
                );
            }
            other => panic!("expected ShowFinished, got {:?}", other),
        }
    }

    #[test]
    fn test_total_score_overflow_is_rejected() {
        let (tx, _rx) = mpsc::channel();
        let questions = vec![
            question_worth(i64::from(u32::MAX)),
            question_worth(i64::from(u32::MAX)),
        ];
        let result = Controller::new(questions, tx);
        assert!(matches!(result, Err(QuizError::Validation(_))));
    }

    #[test]
    fn test_max_sized_scores_are_exact() {
        let (tx, rx) = mpsc::channel();
        let half = i64::from(u32::MAX / 2);
        let mut controller =
            Controller::new(vec![question_worth(half), question_worth(half)], tx).unwrap();

        controller.on_event(&Event::start_clicked()).unwrap();
        controller.on_event(&Event::answer(Solution::correct("a").unwrap())).unwrap();
        controller.on_event(&Event::answer(Solution::correct("a").unwrap())).unwrap();

        let expected = (u32::MAX / 2) * 2;
        assert_eq!(controller.progress(), Progress::Finished { score: expected });
        let last = rx.try_iter().last().unwrap();
        assert!(matches!(last, ViewCommand::ShowFinished(ref s) if s.score == expected));
    }

    #[test]
    fn test_resumed_score_above_maximum_is_rejected() {
        let (tx, _rx) = mpsc::channel();
        let result = Controller::with_progress(
            sample_questions().unwrap(),
            Progress::InProgress {
                index: 1,
                score: 500,
            },
            tx,
        );
        assert!(matches!(result, Err(QuizError::Validation(_))));
    }

    #[test]
    fn test_summary_elapsed() {
        let started_at = Utc::now();
        let summary = GameSummary {
            score: 0,
            max_score: 100,
            questions: 1,
            started_at,
            finished_at: started_at + chrono::Duration::seconds(42),
        };
        assert_eq!(summary.elapsed(), Duration::from_secs(42));
    }
}
