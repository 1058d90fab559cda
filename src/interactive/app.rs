//! TUI application state and logic

use crate::core::LENGTH;
use crate::engine::{GameSession, SessionError};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_secret: bool,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Fewest guesses in a won game
    pub best: Option<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.total_games as f64 * 100.0
    }
}

impl App {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "I'm thinking of a 4-digit number with no repeated digits.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "🐂 = right digit, right place   🐮 = right digit, wrong place"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            show_secret: false,
            input_mode: InputMode::Guessing,
            should_quit: false,
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit_guess(&input) {
            Ok(record) => {
                if self.session.is_won() {
                    let attempts = self.session.attempts();
                    self.stats.games_won += 1;
                    self.stats.total_games += 1;
                    self.stats.best = Some(self.stats.best.map_or(attempts, |b| b.min(attempts)));
                    self.input_mode = InputMode::WinCelebration;

                    let celebration = match attempts {
                        1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                        2..=4 => "🔥 MAGNIFICENT deduction! 🔥",
                        5..=6 => "✨ SPLENDID! ✨",
                        7..=8 => "👏 GREAT JOB! 👏",
                        _ => "🎊 SOLVED! 🎊",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message(
                        &format!("Found {} in {attempts} guesses", record.guess),
                        MessageStyle::Success,
                    );
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                } else if self.session.candidates_exhausted() {
                    self.add_message(
                        "No candidates remain - feedback is inconsistent. Press 'n' to restart.",
                        MessageStyle::Error,
                    );
                } else {
                    self.add_message(
                        &format!(
                            "{} {} → {} candidates remaining",
                            record.guess,
                            record.score().to_emoji(),
                            record.remaining
                        ),
                        MessageStyle::Info,
                    );
                }
            }
            Err(SessionError::GameAlreadyWon) => {
                self.add_message("Game already won! Press 'n' to play again.", MessageStyle::Error);
            }
            Err(err @ SessionError::MalformedGuess(_)) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn new_game(&mut self) {
        if self.session.attempts() > 0 && !self.session.is_won() {
            self.stats.total_games += 1;
        }

        self.session.restart();
        self.input_buffer.clear();
        self.messages.clear();
        self.show_secret = false;
        self.input_mode = InputMode::Guessing;
        self.add_message(
            "New game started! I've picked a new secret number.",
            MessageStyle::Info,
        );
    }

    pub fn toggle_reveal(&mut self) {
        self.show_secret = !self.show_secret;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') => {
                self.new_game();
            }
            KeyCode::Char('r') => {
                self.toggle_reveal();
            }
            _ if self.input_mode == InputMode::WinCelebration => {}
            KeyCode::Char(c) => {
                if self.input_buffer.chars().count() < LENGTH {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit();
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Ok(stats) = &res {
        info!(
            games = stats.total_games,
            won = stats.games_won,
            "tui session finished"
        );
    }
    res.map(|_| ())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
