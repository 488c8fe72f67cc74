//! Database module
//!
//! SQLite storage for generated plans. Persistence always happens after the
//! planner has returned; nothing in `planner` touches the database.

pub mod connection;
pub mod migrations;

pub use connection::{Database, DbError, DbResult};
