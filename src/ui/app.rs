use crate::ai::Agent;
use crate::game::{GameOutcome, GameState, Player, StateError};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Interactive turn loop: the human plays Red with the column cursor, the
/// computer agent plays Yellow.
pub struct App {
    game_state: GameState,
    computer: Box<dyn Agent>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(computer: Box<dyn Agent>) -> Self {
        App {
            game_state: GameState::initial(),
            computer,
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if !self.game_state.is_terminal()
                && self.game_state.current_player() == Player::Yellow
            {
                self.computer_move();
            } else {
                self.handle_events()?;
            }
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // Reset game
                self.game_state = GameState::initial();
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column. A full column is
    /// rejected with a message and no state change.
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => self.announce_outcome(),
            Err(StateError::ColumnFull) => {
                self.message = Some(format!("Column {} is full", self.selected_column + 1));
            }
            Err(StateError::InvalidColumn) => {
                self.message = Some("Invalid move.".to_string());
            }
            Err(StateError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Ask the search engine for the computer's move.
    fn computer_move(&mut self) {
        let action = self.computer.select_action(&self.game_state);
        match self.game_state.apply_move_mut(action) {
            Ok(()) => {
                self.message = Some(format!("{} played column {}", self.computer.name(), action + 1));
                self.announce_outcome();
            }
            Err(err) => {
                // The agent contract filters full columns; reaching this is a bug
                self.message = Some(format!("{} chose an illegal move: {err}", self.computer.name()));
            }
        }
    }

    fn announce_outcome(&mut self) {
        if let Some(outcome) = self.game_state.outcome() {
            self.message = Some(match outcome {
                GameOutcome::Winner(player) => format!("{} wins!", player.name()),
                GameOutcome::Draw => "It's a tie!".to_string(),
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}
