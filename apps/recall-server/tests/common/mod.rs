//! Common test utilities and fixtures for integration tests.
//!
//! Provides a TestContext that builds the full router around a chosen
//! configuration. No external services are involved.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use recall_server::config::Config;
use recall_server::{build_router, AppState};

/// Test context holding the application router.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a test context with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a test context with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            app: build_router(AppState::new(config)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server around the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}
