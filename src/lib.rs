pub mod cli;
pub mod config;
pub mod core;
pub mod games;
pub mod logging;

// Re-export for convenience
pub use crate::core::engine::Engine;
pub use crate::core::game::{Flow, Game};
