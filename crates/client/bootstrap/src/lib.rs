//! Shared bootstrap utilities for lobby front-ends.
//!
//! Provides configuration loading, content assembly, and store setup that can
//! be reused by the terminal client or any other host.
pub mod builder;
pub mod config;
pub mod content;

pub use builder::{SetupBuilder, SetupSession};
pub use config::SetupConfig;
pub use content::{BundledContent, ContentSource, DirectoryContent};
