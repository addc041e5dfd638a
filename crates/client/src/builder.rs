//! Client builder with dependency injection pattern.

use std::sync::Arc;

use anyhow::{Context, Result};
use game_core::SetupStore;

use crate::{Client, Frontend};

/// Builder for constructing a Client with proper validation.
///
/// Both the store and the frontend are required; `build()` fails fast when
/// either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    store: Option<Arc<dyn SetupStore>>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration store (required).
    ///
    /// Usually obtained from `client_bootstrap::SetupSession::store_handle`.
    pub fn store(mut self, store: Arc<dyn SetupStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the store or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let store = self
            .store
            .context("Store is required. Use .store() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { store, frontend })
    }
}
