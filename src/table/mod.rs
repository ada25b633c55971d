//! Shared table of running games.
//!
//! [`GameTable`] is what a server hands to its request handlers. Each game
//! sits behind its own mutex together with its own random stream, so every
//! operation on one game runs to completion before the next starts, while
//! different games never contend.
//!
//! This is the only layer that logs. Install any `log` backend to see it.

mod registry;

pub use registry::GameTable;
