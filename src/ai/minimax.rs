use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{self, Board, Cell, GameState, Player, COLS};

use super::agent::Agent;
use super::heuristic::{CompletedRunsHeuristic, Heuristic};

/// Ply budget for the root scoring pass. Every recursive call consumes one
/// ply regardless of whose turn it is.
pub const SEARCH_DEPTH: usize = 7;

/// All legal successors of `board` for `mark`, columns in ascending order.
/// The order matters: it is the tie-break order among equally scored moves.
/// Empty only when the board is completely full.
pub fn generate_children(board: &Board, mark: Cell) -> Vec<Board> {
    (0..COLS)
        .filter(|&col| !board.is_column_full(col))
        .map(|col| {
            board
                .with_piece(col, mark)
                .expect("column was checked non-full")
        })
        .collect()
}

/// A candidate computer move: the column, the board it produces, and the
/// minimax score of that board.
#[derive(Debug, Clone, Copy)]
pub struct ScoredChild {
    pub column: usize,
    pub board: Board,
    pub score: f64,
}

/// Depth-limited minimax with alpha-beta pruning. The computer plays Yellow,
/// the minimizing side; Red is maximizing.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(CompletedRunsHeuristic),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Agent with a fixed RNG seed, so tie-breaks are reproducible.
    pub fn seeded(depth: usize, seed: u64) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(CompletedRunsHeuristic),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            depth,
            heuristic,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Minimax value of `board` with `depth` plies of lookahead remaining.
    /// At maximizing nodes Red is hypothetically to move, at minimizing nodes
    /// Yellow. Pruning stops sibling exploration once `beta <= alpha`; the
    /// returned value is identical to an unpruned full-width search.
    pub fn minimax(
        &self,
        board: &Board,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
        depth: usize,
    ) -> f64 {
        if depth == 0 || game::is_terminal(board) {
            return self.heuristic.evaluate(board);
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for child in generate_children(board, Cell::Red) {
                let score = self.minimax(&child, false, alpha, beta, depth - 1);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for child in generate_children(board, Cell::Yellow) {
                let score = self.minimax(&child, true, alpha, beta, depth - 1);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Score every legal Yellow move from `board`. Each child is searched
    /// with a fresh full window, starting on the human's (maximizing) turn,
    /// matching alternating-turn semantics.
    pub fn score_children(&self, board: &Board) -> Vec<ScoredChild> {
        (0..COLS)
            .filter(|&col| !board.is_column_full(col))
            .map(|col| {
                let child = board
                    .with_piece(col, Cell::Yellow)
                    .expect("column was checked non-full");
                let score =
                    self.minimax(&child, true, f64::NEG_INFINITY, f64::INFINITY, self.depth);
                ScoredChild {
                    column: col,
                    board: child,
                    score,
                }
            })
            .collect()
    }

    /// Pick the computer's move: lowest-scoring child (the computer
    /// minimizes), generation order breaking ties, except that when every
    /// child scores the same the pick is uniformly random among them.
    /// Callers must rule out terminal boards first.
    pub fn choose_move(&mut self, board: &Board) -> ScoredChild {
        assert!(
            !game::is_terminal(board),
            "choose_move called on a terminal board"
        );

        let mut scored = self.score_children(board);
        // Stable sort: equal scores keep ascending column order
        scored.sort_by(|a, b| a.score.total_cmp(&b.score));

        // Sorted, so first == last means every score is the same
        let pick = if scored.len() > 1 && scored[0].score == scored[scored.len() - 1].score {
            self.rng.random_range(0..scored.len())
        } else {
            0
        };
        scored[pick]
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        debug_assert_eq!(state.current_player(), Player::Yellow);
        self.choose_move(state.board()).column
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
