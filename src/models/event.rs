//! Event payloads published on the event bus

use crate::models::Solution;
use crate::{QuizError, Result};
use std::fmt;
use std::str::FromStr;

/// Kinds of user-originated events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The start button on the title screen was activated
    StartClicked,
    /// An answer was picked on the question screen
    Answer,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::StartClicked => "start_clicked",
            EventKind::Answer => "answer",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "start_clicked" => Ok(EventKind::StartClicked),
            "answer" => Ok(EventKind::Answer),
            other => Err(QuizError::Validation(format!(
                "Unknown event kind: {}",
                other
            ))),
        }
    }
}

/// An event travelling from the view to its listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    selected_solution: Option<Solution>,
}

impl Event {
    /// Create an event.
    ///
    /// An `Answer` event must carry the selected solution. Other kinds do not
    /// use one; a solution passed with them is dropped.
    pub fn new(kind: EventKind, selected_solution: Option<Solution>) -> Result<Self> {
        match kind {
            EventKind::Answer if selected_solution.is_none() => Err(QuizError::Validation(
                "An answer event requires a selected solution".to_string(),
            )),
            EventKind::Answer => Ok(Self {
                kind,
                selected_solution,
            }),
            _ => Ok(Self {
                kind,
                selected_solution: None,
            }),
        }
    }

    pub fn start_clicked() -> Self {
        Self {
            kind: EventKind::StartClicked,
            selected_solution: None,
        }
    }

    pub fn answer(selected: Solution) -> Self {
        Self {
            kind: EventKind::Answer,
            selected_solution: Some(selected),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The picked solution; always present for `Answer` events
    pub fn selected_solution(&self) -> Option<&Solution> {
        self.selected_solution.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_requires_solution() {
        let result = Event::new(EventKind::Answer, None);
        assert!(matches!(result, Err(QuizError::Validation(_))));
    }

    #[test]
    fn test_answer_with_solution() {
        let solution = Solution::correct("2").unwrap();
        let event = Event::new(EventKind::Answer, Some(solution.clone())).unwrap();
        assert_eq!(event.kind(), EventKind::Answer);
        assert_eq!(event.selected_solution(), Some(&solution));
        assert_eq!(event, Event::answer(solution));
    }

    #[test]
    fn test_start_clicked_needs_no_solution() {
        let event = Event::new(EventKind::StartClicked, None).unwrap();
        assert_eq!(event, Event::start_clicked());

        let with_extra =
            Event::new(EventKind::StartClicked, Some(Solution::correct("x").unwrap())).unwrap();
        assert!(with_extra.selected_solution().is_none());
    }

    #[test]
    fn test_event_kind_strings() {
        assert_eq!(EventKind::StartClicked.to_string(), "start_clicked");
        assert_eq!("answer".parse::<EventKind>().unwrap(), EventKind::Answer);
        assert!("restart".parse::<EventKind>().is_err());
    }
}
