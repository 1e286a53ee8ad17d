//! Main application controller
//!
//! Wires the event bus, the game controller and the view together, and runs
//! the terminal rendering loop.

use crate::{
    app::{
        state::NavigationAction,
        tui::Tui,
        view::{ScreenKind, ScreenManager, ViewCommand},
    },
    config::{QuizConfig, WindowConfig},
    events::EventBus,
    game::Controller,
    models::Question,
    Result,
};
use ratatui::Frame;
use std::sync::mpsc::{self, Receiver};
use tracing::{debug, info};

/// One game session: a single event bus shared by the view and controller
#[derive(Debug)]
pub struct QuizSession {
    bus: EventBus,
    view: ScreenManager,
    commands: Receiver<ViewCommand>,
}

impl QuizSession {
    /// Build a session over `questions`, starting on the title screen
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let controller = Controller::new(questions, tx)?;

        let mut bus = EventBus::new();
        bus.register(controller);

        Ok(Self {
            bus,
            view: ScreenManager::new(),
            commands: rx,
        })
    }

    /// Feed a navigation action to the view, then apply whatever the
    /// controller asked for in response
    pub fn dispatch(&mut self, action: NavigationAction) -> Result<()> {
        self.view.handle_action(action, &mut self.bus)?;
        self.pump();
        Ok(())
    }

    /// Apply pending view commands
    pub fn pump(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            self.view.apply(command);
        }
    }

    pub fn view(&self) -> &ScreenManager {
        &self.view
    }

    /// Draw the current screen
    pub fn render(&mut self, f: &mut Frame, window: &WindowConfig) {
        self.view.render(f, window);
    }
}

/// TUI application
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Game session
    session: QuizSession,
    /// Application config
    config: QuizConfig,
    should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: QuizConfig, questions: Vec<Question>) -> Result<Self> {
        Ok(Self {
            tui: Tui::new(config.tick_rate())?,
            session: QuizSession::new(questions)?,
            config,
            should_quit: false,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()
    }

    /// Run the main application loop until the player quits
    pub fn run(&mut self) -> Result<()> {
        info!("entering main loop");
        while !self.should_quit {
            self.draw()?;
            self.handle_events()?;
        }
        info!("leaving main loop");
        Ok(())
    }

    /// Restore the terminal
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()
    }

    fn draw(&mut self) -> Result<()> {
        let session = &mut self.session;
        let window = &self.config.window;
        self.tui.draw(|f| session.render(f, window))
    }

    /// Handle keyboard events and update state
    fn handle_events(&mut self) -> Result<()> {
        if let Some(key) = self.tui.next_key()? {
            let action = NavigationAction::from_key(key);

            match action {
                NavigationAction::Quit => self.should_quit = true,
                NavigationAction::Back if self.session.view().current() == ScreenKind::Title => {
                    self.should_quit = true
                }
                NavigationAction::None => {}
                _ => {
                    debug!(?action, "dispatching action");
                    self.session.dispatch(action)?;
                }
            }
        }
        Ok(())
    }
}
