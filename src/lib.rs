//! In-memory users API library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod response;
pub mod routes;
pub mod store;

pub use config::Config;
pub use error::{ApiError, Result};
pub use store::{MemoryStore, StoreError, UserStore};

use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    pub fn new(store: Arc<dyn UserStore>, config: Config) -> Self {
        Self { store, config }
    }
}
