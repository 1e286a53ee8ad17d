//! Finished screen implementation
//!
//! Displays the outcome of a completed game.

use super::help_line;
use crate::game::GameSummary;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};
use std::time::Duration;

/// Finished screen component
#[derive(Debug, Clone)]
pub struct FinishedScreen {
    summary: GameSummary,
}

impl FinishedScreen {
    pub fn new(summary: GameSummary) -> Self {
        Self { summary }
    }

    pub fn summary(&self) -> &GameSummary {
        &self.summary
    }

    /// Render the finished screen into `area`
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(6),    // Summary table
                Constraint::Length(1), // Help text
            ])
            .split(area);

        let title = Paragraph::new("Game Over")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, chunks[0]);

        self.render_summary(f, chunks[1]);

        f.render_widget(
            help_line(&[("Enter", "Back to title"), ("Q", "Quit")]),
            chunks[2],
        );
    }

    fn render_summary(&self, f: &mut Frame, area: Rect) {
        let summary = &self.summary;

        // Pre-format all strings so the rows can borrow them
        let score_str = format!("{} / {}", summary.score, summary.max_score);
        let questions_str = summary.questions.to_string();
        let elapsed_str = format_elapsed(summary.elapsed());
        let finished_str = summary
            .finished_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string();

        let rows = vec![
            Row::new(vec!["Final Score:", score_str.as_str()])
                .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Row::new(vec!["Questions:", questions_str.as_str()]),
            Row::new(vec!["Time Taken:", elapsed_str.as_str()]),
            Row::new(vec!["Finished:", finished_str.as_str()]),
        ];

        let table = Table::new(rows, [Constraint::Length(18), Constraint::Min(20)])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .column_spacing(2);

        f.render_widget(table, area);
    }
}

/// Human-readable elapsed time, rounded to whole seconds
pub fn format_elapsed(elapsed: Duration) -> String {
    humantime::format_duration(Duration::from_secs(elapsed.as_secs())).to_string()
}
