//! Core library surface for the game catalog console application.
//!
//! The binary only wires these pieces together; tests drive the same `App`
//! with scripted input.
pub mod db;
pub mod logging;
pub mod models;
pub mod ui;

/// Persistence entry points used by `main.rs`.
pub use db::{database_path, Store, StoreError};

/// Domain types shared by the store and the menu.
pub use models::{Game, GameField, GameSummary};

/// The interactive controller and its driving loop.
pub use ui::{run_app, App, MenuChoice};
