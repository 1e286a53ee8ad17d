//! Title screen implementation
//!
//! Heading plus a single Start button.

use super::help_line;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title screen component
#[derive(Debug, Clone, Default)]
pub struct TitleScreen;

impl TitleScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the title screen into `area`
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Top padding
                Constraint::Length(3), // Heading
                Constraint::Length(2), // Subtitle
                Constraint::Length(3), // Start button
                Constraint::Min(1),    // Bottom padding
                Constraint::Length(1), // Help text
            ])
            .split(area);

        let heading = Paragraph::new("QUIZ GAME")
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
        f.render_widget(heading, chunks[1]);

        let subtitle = Paragraph::new("Answer every question to finish the game")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, chunks[2]);

        self.render_start_button(f, chunks[3]);

        f.render_widget(
            help_line(&[("Enter", "Start"), ("Q", "Quit")]),
            chunks[5],
        );
    }

    fn render_start_button(&self, f: &mut Frame, area: Rect) {
        let button_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(14),
                Constraint::Min(0),
            ])
            .split(area)[1];

        let button = Paragraph::new("Start")
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(button, button_area);
    }
}
