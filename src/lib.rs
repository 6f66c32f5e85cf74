//! blockfall - a terminal falling-block puzzle game.
//!
//! `core` is the deterministic simulation engine (board, pieces, scoring);
//! `input` and `term` are the thin keyboard and rendering adapters around
//! it; `types` holds the shared constants and enums.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
