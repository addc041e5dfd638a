//! Event handling for CLI client.
//!
//! This module contains the frame loop that polls the options controller,
//! routes key presses into it and redraws the terminal.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
