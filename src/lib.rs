//! # Connect Four vs. Minimax
//!
//! A terminal Connect Four game against a computer opponent driven by
//! depth-limited minimax search with alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, winner identification, state machine
//! - [`ai`] — Agent trait, the minimax search engine, heuristic, random baseline
//! - [`ui`] — Terminal UI: interactive game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
