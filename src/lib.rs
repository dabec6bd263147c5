//! # Match-3 Board Engine
//!
//! This library provides the board-state engine for a tile-matching puzzle:
//! a rectangular grid of typed tiles with swap-driven match detection,
//! cascading clear/gravity/refill resolution, exhaustive legal-move (hint)
//! discovery, and randomized generation that guarantees a playable board.
//!
//! The engine performs no I/O and has no concept of real time; presentation
//! layers call into it and render its outputs. The crate ships one such
//! consumer:
//! - `console_player`: interactive play on the command line.
//!
//! ## Modules
//! - `engine`: Board representation (`Board`), tile types (`Tile`), the match
//!   detector, swap validation, gravity/refill primitives, move enumeration,
//!   and randomized generation.
//! - `game`: The move driver (`Game`) that commits or reverts swaps and runs
//!   the cascade resolution loop.
//! - `utils`: Utility functions, such as parsing board fixtures from strings.

pub mod engine;
pub mod game;
pub mod utils;
