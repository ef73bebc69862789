// Domain layer - automaton engine
pub mod domain;

// Application layer - configuration, pacing and the generation driver
pub mod application;

// Infrastructure layer - rendering for the viewer
pub mod rendering;

// Re-exports for convenience
pub use domain::{CancelToken, Cancelled, CellState, Grid, Material, StepStrategy};
pub use application::{CellularAutomaton, GenerationSummary, GeneratorConfig, TileMap, TokioPacer};
