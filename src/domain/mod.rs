mod cell;
mod grid;
mod rules;
mod cancel;
mod algorithm;
mod diff;
mod surface;
pub mod seeder;
pub mod stepper;

pub use cell::{CellState, Material};
pub use grid::{Grid, GridBuffers};
pub use rules::{ThresholdRule, count_ground_neighbors, MAX_NEIGHBORS};
pub use cancel::{CancelToken, Cancelled};
pub use algorithm::StepStrategy;
pub use diff::{ApplyReport, DiffApplier};
pub use surface::{GridSize, TileSurface};
