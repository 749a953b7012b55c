pub mod core {
    pub mod engine;
    pub mod game;
}

pub mod cli;
pub mod config;
pub mod games;
pub mod logging;
pub mod settings;
pub mod source;

// Re-export for convenience
pub use crate::core::game::{Context, Flow, Game};
