use crate::game::GameState;

/// Interface between the turn loop and anything that can pick a move.
pub trait Agent {
    /// Select a column to play given the current game state. Must only be
    /// called on non-terminal states.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
