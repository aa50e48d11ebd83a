//! # Connect Four
//!
//! A two-player Connect Four game on a configurable rectangular board,
//! playable by humans and a heuristic computer player in a terminal UI
//! built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, run detection, column ordering,
//!   turn state machine
//! - [`ai`] — Move-source trait and the priority-chain computer player
//! - [`ui`] — Terminal UI: interactive game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
