mod config;
mod generator;
mod pacing;
mod tile_map;

pub use config::{ConfigError, GeneratorConfig};
pub use generator::{CellularAutomaton, GenerationSummary};
pub use pacing::{Pacer, TokioPacer};
pub use tile_map::{TileHandle, TileMap};
