//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the controller's view models
//! and renders to a terminal frame. Widgets never edit the store.

pub mod footer;
pub mod header;
pub mod messages;
pub mod options;
pub mod players;
