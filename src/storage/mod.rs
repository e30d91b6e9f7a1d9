//! Storage module for meetkeep
//!
//! Read-side access to the SQLite database owned by the meeting analyzer.

mod database;

pub use database::Database;
