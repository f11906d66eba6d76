//! Job storage for the job board.
//!
//! Provides the repository trait and an in-memory implementation that holds
//! the whole snapshot behind a single lock.

pub mod repo;

pub use repo::*;
