//! TUI screen components
//!
//! One component per screen the game window can show.

pub mod finished;
pub mod question;
pub mod title;

pub use finished::FinishedScreen;
pub use question::QuestionScreen;
pub use title::TitleScreen;

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Build a centered key-hint line such as "Enter Start  Q Quit"
pub(crate) fn help_line(hints: &[(&'static str, &'static str)]) -> Paragraph<'static> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, label)) in hints.iter().enumerate() {
        spans.push(Span::styled(*key, key_style));
        let label = if i + 1 < hints.len() {
            format!(" {}  ", label)
        } else {
            format!(" {}", label)
        };
        spans.push(Span::raw(label));
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
