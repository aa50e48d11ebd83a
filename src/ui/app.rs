use crate::ai::{Agent, HeuristicAgent};
use crate::config::{AppConfig, PlayerKind};
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    rows: usize,
    cols: usize,
    red: PlayerKind,
    yellow: PlayerKind,
    computer: HeuristicAgent,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let rows = config.board.rows;
        let cols = config.board.cols;
        App {
            game_state: GameState::new(rows, cols),
            rows,
            cols,
            red: config.players.red,
            yellow: config.players.yellow,
            computer: HeuristicAgent::new(cols),
            selected_column: cols / 2,
            should_quit: false,
            message: None,
        }
    }

    fn controller(&self, player: Player) -> PlayerKind {
        match player {
            Player::Red => self.red,
            Player::Yellow => self.yellow,
        }
    }

    fn mode_label(&self) -> String {
        let label = |kind| match kind {
            PlayerKind::Human => "Human",
            PlayerKind::Computer => "Computer",
        };
        format!("{} vs {}", label(self.red), label(self.yellow))
    }

    fn is_computer_turn(&self) -> bool {
        !self.game_state.is_terminal()
            && self.controller(self.game_state.current_player()) == PlayerKind::Computer
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let mode = self.mode_label();
            terminal.draw(|f| {
                super::game_view::render(
                    f,
                    &self.game_state,
                    self.selected_column,
                    &self.message,
                    &mode,
                )
            })?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            if self.should_quit {
                break;
            }

            if self.is_computer_turn() {
                self.computer_move();
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
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.message = None;
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                self.message = None;
                if self.selected_column < self.cols - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Drop keys only act on a human turn
                if !self.is_computer_turn() {
                    self.message = None;
                    self.drop_piece();
                }
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::new(self.rows, self.cols);
                self.selected_column = self.cols / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop a piece in the selected column for the human player
    fn drop_piece(&mut self) {
        match self.game_state.apply_move(self.selected_column) {
            Ok(()) => {
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(Self::outcome_message(outcome));
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Let the computer take its turn
    fn computer_move(&mut self) {
        let player = self.game_state.current_player();
        let column = self.computer.select_action(&self.game_state);

        match self.game_state.apply_move(column) {
            Ok(()) => {
                self.message = Some(match self.game_state.outcome() {
                    Some(outcome) => Self::outcome_message(outcome),
                    None => format!("Computer ({player}) chose column {}", column + 1),
                });
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    fn outcome_message(outcome: GameOutcome) -> String {
        match outcome {
            GameOutcome::Winner(player) => format!("{player} wins!"),
            GameOutcome::Draw => "Board full and no winner. It's a tie!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.players.red = PlayerKind::Human;
        config.players.yellow = PlayerKind::Computer;
        config
    }

    #[test]
    fn test_new_app_starts_centered() {
        let app = App::new(&test_config());
        assert_eq!(app.selected_column, 2);
        assert!(!app.should_quit);
        assert!(!app.game_state.is_terminal());
    }

    #[test]
    fn test_controller_assignment() {
        let app = App::new(&test_config());
        assert_eq!(app.controller(Player::Red), PlayerKind::Human);
        assert_eq!(app.controller(Player::Yellow), PlayerKind::Computer);
        assert_eq!(app.mode_label(), "Human vs Computer");
    }

    #[test]
    fn test_computer_turn_detection() {
        let mut app = App::new(&test_config());
        assert!(!app.is_computer_turn()); // Red (human) starts
        app.game_state.apply_move(1).unwrap();
        assert!(app.is_computer_turn());
    }

    #[test]
    fn test_computer_move_advances_the_game() {
        let mut app = App::new(&test_config());
        app.game_state.apply_move(1).unwrap(); // Human red
        app.computer_move();
        assert_eq!(app.game_state.current_player(), Player::Red);
        assert!(app.message.as_deref().unwrap().starts_with("Computer (Yellow)"));
    }

    #[test]
    fn test_restart_resets_state() {
        let mut app = App::new(&test_config());
        app.game_state.apply_move(0).unwrap();
        app.selected_column = 0;
        app.handle_key(KeyEvent::from(KeyCode::Char('r')));
        assert!(!app.game_state.is_terminal());
        assert_eq!(app.game_state.current_player(), Player::Red);
        assert_eq!(app.selected_column, 2);
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(&test_config());
        app.handle_key(KeyEvent::from(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_selection_stays_in_range() {
        let mut app = App::new(&test_config());
        for _ in 0..10 {
            app.handle_key(KeyEvent::from(KeyCode::Right));
        }
        assert_eq!(app.selected_column, 3);
        for _ in 0..10 {
            app.handle_key(KeyEvent::from(KeyCode::Left));
        }
        assert_eq!(app.selected_column, 0);
    }
}
