use crate::game::{Board, Cell, COLS, ROWS};

/// Trait for statically evaluating a board. Scores are absolute: positive
/// favors Red (the human, the maximizing side), negative favors Yellow.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board) -> f64;
}

/// Scores only completed runs: +100 for every four-cell window filled with
/// Red, -100 for every window filled with Yellow. Partial threats of two or
/// three score nothing, so the search only steers by wins it can actually
/// reach within its depth. A known weakness, kept deliberately.
pub struct CompletedRunsHeuristic;

pub const RUN_SCORE: f64 = 100.0;

impl CompletedRunsHeuristic {
    fn score_window(window: [Cell; 4]) -> f64 {
        if window == [Cell::Red; 4] {
            RUN_SCORE
        } else if window == [Cell::Yellow; 4] {
            -RUN_SCORE
        } else {
            0.0
        }
    }
}

impl Heuristic for CompletedRunsHeuristic {
    fn evaluate(&self, board: &Board) -> f64 {
        let mut score = 0.0;

        // Horizontal
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                score += Self::score_window([
                    board.get(row, col),
                    board.get(row, col + 1),
                    board.get(row, col + 2),
                    board.get(row, col + 3),
                ]);
            }
        }

        // Vertical
        for row in 0..ROWS - 3 {
            for col in 0..COLS {
                score += Self::score_window([
                    board.get(row, col),
                    board.get(row + 1, col),
                    board.get(row + 2, col),
                    board.get(row + 3, col),
                ]);
            }
        }

        // Ascending diagonal
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                score += Self::score_window([
                    board.get(row, col),
                    board.get(row + 1, col + 1),
                    board.get(row + 2, col + 2),
                    board.get(row + 3, col + 3),
                ]);
            }
        }

        // Descending diagonal
        for row in 0..ROWS - 3 {
            for col in 3..COLS {
                score += Self::score_window([
                    board.get(row, col),
                    board.get(row + 1, col - 1),
                    board.get(row + 2, col - 2),
                    board.get(row + 3, col - 3),
                ]);
            }
        }

        score
    }
}
