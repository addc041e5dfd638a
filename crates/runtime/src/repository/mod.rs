//! Repository layer for the mutable game configuration.
//!
//! Repositories hold data that CHANGES while the lobby is open: parameter
//! values, slot occupancy and the revision counter. Static content (the
//! catalog, roster and strings) is loaded once by `game-content`.

mod memory;

pub use memory::MemorySetupStore;
