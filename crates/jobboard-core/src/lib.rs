//! Core domain types for the job board.
//!
//! This crate contains:
//! - Job identifiers and job records
//! - Query parameters, result pages and filter options
//! - The predicate and distinct-value logic shared by every store

pub mod error;
pub mod id;
pub mod job;
pub mod query;

pub use error::{Error, Result};
pub use id::JobId;
pub use job::JobRecord;
pub use query::{FilterOptions, JobPage, JobQuery, QueryLimits};
