//! # gdata-core
//!
//! Core encoding utilities for building GData feed request URLs.
//!
//! This crate provides the escaping rules, query-string assembly, and
//! error types shared by GData feed client crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types for request construction
//! - [`escape`] - Percent-escaping rules for URL components
//! - [`query`] - Query parameter builder and `?k=v&k=v` rendering

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod escape;
pub mod query;

// Re-export commonly used types
pub use error::{Error, Result};
