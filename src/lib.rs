// Domain layer - codec, rasterizer and the automaton collaborator
pub mod domain;

// Application layer - session state machine and scheduling
pub mod application;
pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use domain::{Cell, CellCoord, GridSize, LifeUniverse, Point, Universe};
pub use application::{Controls, PlaybackState, Session};
pub use config::AppConfig;
pub use error::{ConfigError, Error, SessionError};
pub use rendering::{Canvas, Renderer, Surface};
