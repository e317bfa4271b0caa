//! # Fyyur Common Library
//!
//! Shared code for the Fyyur booking directory:
//! - Error taxonomy
//! - Bootstrap configuration
//! - Database initialization, models and the entity repository
//! - View models (venue grouping, show partitioning, genre parsing)
//! - Timestamp helpers

pub mod config;
pub mod db;
pub mod error;
pub mod time;
pub mod view;

pub use db::Repository;
pub use error::{Error, Result};
