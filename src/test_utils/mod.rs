//! Test utilities shared by the in-crate test modules.
//!
//! This module provides:
//! - In-memory and failing `RowStore` implementations
//! - A builder for `AppState` backed by those stores
//! - Ephemeral servers standing in for the Google endpoints

mod app_state_builder;
mod fake_server;
mod row_store_mocks;

pub use app_state_builder::*;
pub use fake_server::*;
pub use row_store_mocks::*;
