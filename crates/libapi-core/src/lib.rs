//! # libapi-core
//!
//! Core crate for libapi. Contains the unified error system and the
//! configuration schemas used by services built on the response helpers.
//!
//! This crate has **no** internal dependencies on other libapi crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
