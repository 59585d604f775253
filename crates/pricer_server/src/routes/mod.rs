//! Route modules for the pricer server
//!
//! This module contains endpoint group-specific routers:
//! - welcome: API banner
//! - health: Health check and readiness endpoints
//! - options: Option record CRUD
//! - valuation: Black-76 valuation of stored records

pub mod health;
pub mod options;
pub mod valuation;
pub mod welcome;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::clock::{Clock, SystemClock};
use crate::config::ServerConfig;
use crate::store::{InMemoryOptionRepository, OptionRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
    /// Option records
    pub store: Arc<dyn OptionRepository>,
    /// Source of `now` and `today`
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create a new AppState with an empty in-memory store and the wall clock
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            start_time: std::time::Instant::now(),
            store: Arc::new(InMemoryOptionRepository::new()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the record store
    pub fn with_store(mut self, store: Arc<dyn OptionRepository>) -> Self {
        self.store = store;
        self
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(welcome::routes())
        .merge(health::routes())
        .merge(options::routes())
        .merge(valuation::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
