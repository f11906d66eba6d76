//! KDL configuration parsing for the job board.
//!
//! This crate handles parsing of:
//! - Job feeds (batches of job postings)
//! - Server configuration
//! - The built-in mock job set used to seed an empty store

pub mod error;
pub mod jobs;
mod nodes;
pub mod server;

pub use error::{ConfigError, ConfigResult};
pub use jobs::{default_jobs, load_jobs, parse_jobs};
pub use server::{ServerConfig, load_server_config, parse_server_config};
