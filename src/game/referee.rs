use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

fn player_of(cell: Cell) -> Option<Player> {
    match cell {
        Cell::Red => Some(Player::Red),
        Cell::Yellow => Some(Player::Yellow),
        Cell::Empty => None,
    }
}

/// Identify the winner of an arbitrary board by scanning every four-cell
/// window: horizontal, then vertical, then ascending diagonal, then
/// descending diagonal, in increasing row/column order. Returns on the first
/// completed run found. Only when no run exists anywhere does a full board
/// count as a draw, so a win is never misreported as a draw.
pub fn identify_winner(board: &Board) -> Option<GameOutcome> {
    // Horizontal
    for row in 0..ROWS {
        for col in 0..COLS - 3 {
            let first = board.get(row, col);
            if first != Cell::Empty && (1..4).all(|i| board.get(row, col + i) == first) {
                return player_of(first).map(GameOutcome::Winner);
            }
        }
    }

    // Vertical
    for row in 0..ROWS - 3 {
        for col in 0..COLS {
            let first = board.get(row, col);
            if first != Cell::Empty && (1..4).all(|i| board.get(row + i, col) == first) {
                return player_of(first).map(GameOutcome::Winner);
            }
        }
    }

    // Ascending diagonal
    for row in 0..ROWS - 3 {
        for col in 0..COLS - 3 {
            let first = board.get(row, col);
            if first != Cell::Empty && (1..4).all(|i| board.get(row + i, col + i) == first) {
                return player_of(first).map(GameOutcome::Winner);
            }
        }
    }

    // Descending diagonal
    for row in 0..ROWS - 3 {
        for col in 3..COLS {
            let first = board.get(row, col);
            if first != Cell::Empty && (1..4).all(|i| board.get(row + i, col - i) == first) {
                return player_of(first).map(GameOutcome::Winner);
            }
        }
    }

    if board.is_full() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}

/// True iff the game is over: someone has four in a row, or the board is full.
pub fn is_terminal(board: &Board) -> bool {
    identify_winner(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Completely fill the board with a pattern that contains no run of four
    /// in any orientation. Rows 0, 1, 3, 4 alternate starting with Red; rows
    /// 2 and 5 alternate starting with Yellow, which breaks up every column
    /// and diagonal.
    fn winless_full_board() -> Board {
        let inverted = [false, false, true, false, false, true];
        let mut board = Board::new();
        for col in 0..COLS {
            for row in (0..ROWS).rev() {
                let red = (col % 2 == 0) != inverted[row];
                let cell = if red { Cell::Red } else { Cell::Yellow };
                board.drop_piece(col, cell).unwrap();
            }
        }
        board
    }

    fn swap_marks(board: &Board) -> Board {
        let mut swapped = Board::new();
        for col in 0..COLS {
            for row in (0..ROWS).rev() {
                match board.get(row, col) {
                    Cell::Empty => {}
                    Cell::Red => {
                        swapped.drop_piece(col, Cell::Yellow).unwrap();
                    }
                    Cell::Yellow => {
                        swapped.drop_piece(col, Cell::Red).unwrap();
                    }
                }
            }
        }
        swapped
    }

    #[test]
    fn test_empty_board_in_progress() {
        let board = Board::new();
        assert_eq!(identify_winner(&board), None);
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 2..6 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert_eq!(
            identify_winner(&board),
            Some(GameOutcome::Winner(Player::Red))
        );
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Yellow).unwrap();
        }
        assert_eq!(
            identify_winner(&board),
            Some(GameOutcome::Winner(Player::Yellow))
        );
    }

    #[test]
    fn test_ascending_diagonal_win() {
        let mut board = Board::new();
        // Staircase: Red at (5,0), (4,1), (3,2), (2,3) with Yellow filler
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(1, Cell::Yellow).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(
            identify_winner(&board),
            Some(GameOutcome::Winner(Player::Red))
        );
    }

    #[test]
    fn test_descending_diagonal_win() {
        let mut board = Board::new();
        board.drop_piece(6, Cell::Red).unwrap();
        board.drop_piece(5, Cell::Yellow).unwrap();
        board.drop_piece(5, Cell::Red).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(
            identify_winner(&board),
            Some(GameOutcome::Winner(Player::Red))
        );
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert_eq!(identify_winner(&board), None);
    }

    #[test]
    fn test_full_board_without_run_is_draw() {
        let board = winless_full_board();
        assert!(board.is_full());
        assert_eq!(identify_winner(&board), Some(GameOutcome::Draw));
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_win_takes_priority_over_fullness() {
        // Start from the winless full pattern and repaint the bottom row of
        // columns 0..4 to a single Red run. The board stays full.
        let mut board = winless_full_board();
        let mut cols = Vec::new();
        for col in 0..COLS {
            for row in (0..ROWS).rev() {
                let cell = if row == 5 && col < 4 {
                    Cell::Red
                } else {
                    board.get(row, col)
                };
                cols.push((col, cell));
            }
        }
        board = Board::new();
        for (col, cell) in cols {
            board.drop_piece(col, cell).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(
            identify_winner(&board),
            Some(GameOutcome::Winner(Player::Red))
        );
    }

    #[test]
    fn test_mark_swap_symmetry() {
        let mut board = Board::new();
        for col in 1..5 {
            board.drop_piece(col, Cell::Yellow).unwrap();
        }
        assert_eq!(
            identify_winner(&board),
            Some(GameOutcome::Winner(Player::Yellow))
        );
        assert_eq!(
            identify_winner(&swap_marks(&board)),
            Some(GameOutcome::Winner(Player::Red))
        );
    }
}
