//! # libapi-demo
//!
//! Example HTTP server showing every envelope shape produced by `libapi`.

pub mod handlers;
pub mod middleware;
pub mod router;

pub use router::build_router;
