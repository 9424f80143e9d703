//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{SPLASH_DURATION_MS, UI_POLL_INTERVAL_MS};
use crate::environment::Environment;
use crate::ui::dashboard::updaters::DashboardAction;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::scanner::{ScanCompletion, ScanWorker};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The scan dashboard.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// Resolved backend origin.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Runs submitted scans in the background.
    worker: ScanWorker,

    /// Receives finished scans from the worker.
    completion_receiver: mpsc::Receiver<ScanCompletion>,

    /// Whether to enable background colors
    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        worker: ScanWorker,
        completion_receiver: mpsc::Receiver<ScanCompletion>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            worker,
            completion_receiver,
            with_background_color: ui_config.with_background_color,
        }
    }

    fn show_dashboard(&mut self) {
        let state = DashboardState::new(
            self.environment.clone(),
            self.start_time,
            UIConfig::new(self.with_background_color),
        );
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Cancel whatever scan is still running before the UI goes away.
    fn shutdown(&mut self) {
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.cancel_scan();
        }
    }
}

fn is_quit_key(key: &event::KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    // UI event loop
    loop {
        // Queue all finished scans for processing
        while let Ok(completion) = app.completion_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_completion(completion);
            }
        }

        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.show_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        if is_quit_key(&key) {
                            return Ok(());
                        }
                        // Any other key skips the splash screen
                        app.show_dashboard();
                    }
                    Screen::Dashboard(state) => match state.handle_key(key) {
                        DashboardAction::Submit(ticket) => {
                            app.worker.dispatch(ticket);
                        }
                        DashboardAction::Quit => {
                            app.shutdown();
                            return Ok(());
                        }
                        DashboardAction::None => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
