//! Screen management
//!
//! The view shows exactly one screen at a time inside the game window. It
//! turns key presses into events on the bus and switches screens when the
//! controller tells it to.

use crate::app::screens::{FinishedScreen, QuestionScreen, TitleScreen};
use crate::app::state::NavigationAction;
use crate::config::WindowConfig;
use crate::events::EventBus;
use crate::game::GameSummary;
use crate::models::{Event, Question};
use crate::Result;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};
use tracing::debug;

/// Instructions from the controller to the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// Return to the title screen
    ShowTitle,
    /// Show a question; `number` is 1-based, `score` is the total so far
    ShowQuestion {
        question: Question,
        number: usize,
        total: usize,
        score: u32,
    },
    /// Show the end-of-game summary
    ShowFinished(GameSummary),
}

/// Which screen is on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Title,
    Question,
    Finished,
}

/// The screen on display, together with its widget state
#[derive(Debug, Clone)]
pub enum Screen {
    Title(TitleScreen),
    Question(QuestionScreen),
    Finished(FinishedScreen),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Title(_) => ScreenKind::Title,
            Screen::Question(_) => ScreenKind::Question,
            Screen::Finished(_) => ScreenKind::Finished,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Title(TitleScreen::new())
    }
}

/// Owns the current screen and routes input to it
#[derive(Debug, Default)]
pub struct ScreenManager {
    screen: Screen,
}

impl ScreenManager {
    /// Create a view showing the title screen
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Switch screens as instructed by the controller
    pub fn apply(&mut self, command: ViewCommand) {
        self.screen = match command {
            ViewCommand::ShowTitle => Screen::Title(TitleScreen::new()),
            ViewCommand::ShowQuestion {
                question,
                number,
                total,
                score,
            } => Screen::Question(QuestionScreen::new(question, number, total, score)),
            ViewCommand::ShowFinished(summary) => Screen::Finished(FinishedScreen::new(summary)),
        };
        debug!(screen = ?self.screen.kind(), "switched screen");
    }

    /// Handle a navigation action, publishing events for user gestures
    pub fn handle_action(&mut self, action: NavigationAction, bus: &mut EventBus) -> Result<()> {
        let mut back_to_title = false;

        match &mut self.screen {
            Screen::Title(_) => {
                if action == NavigationAction::Select {
                    bus.publish(&Event::start_clicked())?;
                }
            }
            Screen::Question(screen) => match action {
                NavigationAction::Up => screen.select_previous(),
                NavigationAction::Down => screen.select_next(),
                NavigationAction::Select => {
                    let selected = screen.selected_solution().clone();
                    bus.publish(&Event::answer(selected))?;
                }
                NavigationAction::Choose(index) => {
                    if let Some(selected) = screen.question().solution(index).cloned() {
                        bus.publish(&Event::answer(selected))?;
                    }
                }
                _ => {}
            },
            Screen::Finished(_) => {
                back_to_title =
                    matches!(action, NavigationAction::Select | NavigationAction::Back);
            }
        }

        if back_to_title {
            self.apply(ViewCommand::ShowTitle);
        }
        Ok(())
    }

    /// Render the current screen inside the game window
    pub fn render(&mut self, f: &mut Frame, window: &WindowConfig) {
        let area = window_area(f.size(), window);

        let block = Block::default()
            .title(format!(" {} ", window.title))
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        f.render_widget(block, area);

        match &mut self.screen {
            Screen::Title(screen) => screen.render(f, inner),
            Screen::Question(screen) => screen.render(f, inner),
            Screen::Finished(screen) => screen.render(f, inner),
        }
    }
}

/// Center the configured window in `area`, clamped to what fits
pub fn window_area(area: Rect, window: &WindowConfig) -> Rect {
    let (cols, rows) = window.cells();
    let width = cols.min(area.width);
    let height = rows.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
