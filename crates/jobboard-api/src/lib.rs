//! API server for the job board.
//!
//! Provides the HTTP JSON endpoints the board's UI talks to.

pub mod error;
pub mod routes;
pub mod seed;
pub mod state;

pub use state::AppState;
