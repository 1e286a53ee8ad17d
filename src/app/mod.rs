//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and the session that ties the view to the game controller.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;
pub mod view;

pub use app::{App, QuizSession};
pub use screens::{FinishedScreen, QuestionScreen, TitleScreen};
pub use state::NavigationAction;
pub use tui::Tui;
pub use view::{Screen, ScreenKind, ScreenManager, ViewCommand};
