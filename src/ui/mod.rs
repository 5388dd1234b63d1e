//! Terminal UI: the interactive game view for playing against the engine.

mod app;
mod game_view;

pub use app::App;
