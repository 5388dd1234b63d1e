use super::board::{Board, COLS};
use super::player::Player;
use super::referee::{self, GameOutcome};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
    #[error("game is already over")]
    GameOver,
}

/// One position in a game in progress: the board, whose turn it is, and the
/// outcome once the game has ended. Transitions produce new values; the
/// search never sees a state aliased with its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, StateError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place (for the UI's own state)
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), StateError> {
        if self.is_terminal() {
            return Err(StateError::GameOver);
        }

        self.board
            .drop_piece(column, self.current_player.to_cell())
            .map_err(|e| match e {
                super::board::MoveError::ColumnFull => StateError::ColumnFull,
                super::board::MoveError::InvalidColumn => StateError::InvalidColumn,
            })?;

        self.outcome = referee::identify_winner(&self.board);
        self.current_player = self.current_player.other();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        assert_eq!(new_state.board().get(5, 3), Cell::Red);
        // Original state untouched
        assert_eq!(state.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_rejected_move_leaves_state_unchanged() {
        let mut state = GameState::initial();
        for _ in 0..3 {
            state = state.apply_move(0).unwrap(); // Red
            state = state.apply_move(0).unwrap(); // Yellow
        }
        let before = state;
        assert_eq!(state.apply_move_mut(0), Err(StateError::ColumnFull));
        assert_eq!(state, before);
        assert_eq!(state.apply_move_mut(9), Err(StateError::InvalidColumn));
        assert_eq!(state, before);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red builds the bottom row, Yellow stacks on top
        for col in 0..3 {
            state = state.apply_move(col).unwrap(); // Red
            state = state.apply_move(col).unwrap(); // Yellow
        }
        state = state.apply_move(3).unwrap(); // Red completes the run

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut state = GameState::initial();
        for col in 0..3 {
            state = state.apply_move(col).unwrap();
            state = state.apply_move(col).unwrap();
        }
        state = state.apply_move(3).unwrap();

        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(4).unwrap_err(), StateError::GameOver);
    }

    #[test]
    fn test_legal_actions_exclude_full_columns() {
        let mut state = GameState::initial();
        for _ in 0..3 {
            state = state.apply_move(6).unwrap();
            state = state.apply_move(6).unwrap();
        }
        let legal = state.legal_actions();
        assert_eq!(legal, vec![0, 1, 2, 3, 4, 5]);
    }
}
