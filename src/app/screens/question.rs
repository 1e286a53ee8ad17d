//! Question screen implementation
//!
//! Shows the question text and one numbered row per candidate answer, in
//! the order the question lists them. Includes selection highlighting.

use super::help_line;
use crate::models::{Question, Solution};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Question screen component with answer selection
#[derive(Debug, Clone)]
pub struct QuestionScreen {
    question: Question,
    number: usize,
    total: usize,
    score: u32,
    selected_index: usize,
    list_state: ListState,
}

impl QuestionScreen {
    /// Create a screen for `question`, the `number`-th (1-based) of `total`
    pub fn new(question: Question, number: usize, total: usize, score: u32) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            question,
            number,
            total,
            score,
            selected_index: 0,
            list_state,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Position of this question in the set (1-based)
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Score accumulated before this question
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Get the currently highlighted answer
    pub fn selected_solution(&self) -> &Solution {
        &self.question.solutions()[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        let count = self.question.solutions().len();
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = count - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        let count = self.question.solutions().len();
        if self.selected_index < count - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Render the question screen into `area`
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Progress line
                Constraint::Length(4), // Question text
                Constraint::Min(3),    // Answers
                Constraint::Length(1), // Help text
            ])
            .split(area);

        let progress = Paragraph::new(format!(
            "Question {} of {}  ·  Score {}",
            self.number, self.total, self.score
        ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Right);
        f.render_widget(progress, chunks[0]);

        let question = Paragraph::new(self.question.text().to_string())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(question, chunks[1]);

        self.render_answers(f, chunks[2]);

        f.render_widget(
            help_line(&[("↑↓", "Navigate"), ("Enter", "Answer"), ("1-9", "Pick"), ("Q", "Quit")]),
            chunks[3],
        );
    }

    fn render_answers(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .question
            .solutions()
            .iter()
            .enumerate()
            .map(|(i, solution)| ListItem::new(format!("{}. {}", i + 1, solution.text())))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Answers"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::sample_questions;

    fn screen() -> QuestionScreen {
        let question = sample_questions().unwrap().remove(0);
        QuestionScreen::new(question, 1, 4, 0)
    }

    #[test]
    fn test_question_screen_creation() {
        let screen = screen();
        assert_eq!(screen.selected_index(), 0);
        assert_eq!(screen.selected_solution().text(), "1");
        assert_eq!((screen.number(), screen.total(), screen.score()), (1, 4, 0));
    }

    #[test]
    fn test_answer_navigation() {
        let mut screen = screen();

        screen.select_next();
        assert_eq!(screen.selected_solution().text(), "2");

        screen.select_next();
        screen.select_next();
        screen.select_next();
        assert_eq!(screen.selected_index(), 0);
    }

    #[test]
    fn test_answer_navigation_up() {
        let mut screen = screen();

        // Moving up from the first answer wraps to the last
        screen.select_previous();
        assert_eq!(screen.selected_index(), 3);

        screen.select_previous();
        assert_eq!(screen.selected_index(), 2);
    }
}
