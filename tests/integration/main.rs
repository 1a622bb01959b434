//! Integration tests for the demo API.

mod api_test;
mod helpers;
