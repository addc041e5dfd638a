//! Builds the configuration store handed to front-ends.
use std::sync::Arc;

use anyhow::Result;
use game_core::SetupStore;
use runtime::MemorySetupStore;

use crate::config::SetupConfig;
use crate::content::{ContentSource, DirectoryContent};

/// Builder that assembles content and store for clients.
pub struct SetupBuilder {
    config: SetupConfig,
    content: Arc<dyn ContentSource>,
}

impl SetupBuilder {
    pub fn new(config: SetupConfig) -> Self {
        let content = DirectoryContent::resolve(config.data_dir.clone());
        Self {
            config,
            content: Arc::new(content),
        }
    }

    /// Provide a custom content source (e.g., content already in memory).
    pub fn content_source(mut self, source: impl ContentSource + 'static) -> Self {
        self.content = Arc::new(source);
        self
    }

    pub fn build(self) -> Result<SetupSession> {
        let bundle = self.content.load()?;
        let store = MemorySetupStore::from_bundle(bundle);
        store.reset(self.config.game_mode)?;

        tracing::info!(
            "Lobby store ready: {} parameters, {} slots",
            store.game_parameters().len(),
            store.max_major_players()
        );

        Ok(SetupSession {
            config: self.config,
            store,
        })
    }
}

pub struct SetupSession {
    pub config: SetupConfig,
    pub store: MemorySetupStore,
}

impl SetupSession {
    /// Store handle as consumed by front-ends.
    pub fn store_handle(&self) -> Arc<dyn SetupStore> {
        Arc::new(self.store.clone())
    }
}
