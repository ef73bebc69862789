use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::{
    ApplyReport, CancelToken, Cancelled, DiffApplier, Grid, GridBuffers, GridSize, ThresholdRule,
    TileSurface, seeder, stepper,
};

use super::{GeneratorConfig, Pacer};

/// Outcome of a completed generation run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Seed the run actually used
    pub seed: u64,
    pub dimensions: (usize, usize),
    pub steps: u32,
    /// One report per apply pass; the first is the forced full pass
    pub passes: Vec<ApplyReport>,
}

impl GenerationSummary {
    pub fn total_placed(&self) -> usize {
        self.passes.iter().map(|pass| pass.placed).sum()
    }
}

/// CellularAutomaton drives one terrain generation run:
/// allocate, seed, apply everything, then `iterations` times step and
/// apply only the changed cells, pausing after every apply pass.
///
/// Buffers persist between runs and are reallocated only when the
/// surface reports new dimensions.
#[derive(Debug, Default)]
pub struct CellularAutomaton {
    config: GeneratorConfig,
    buffers: GridBuffers,
    applier: DiffApplier,
}

impl CellularAutomaton {
    pub fn new(config: GeneratorConfig) -> Self {
        let mut automaton = Self::default();
        automaton.configure(config);
        automaton
    }

    /// Replace the options used by subsequent runs. Values are clamped.
    pub fn configure(&mut self, config: GeneratorConfig) {
        self.config = config.sanitized();
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Latest automaton state
    pub fn current_grid(&self) -> &Grid {
        &self.buffers.current
    }

    pub fn buffers(&self) -> &GridBuffers {
        &self.buffers
    }

    /// Run a full generation against `surface`.
    ///
    /// Cancellation is observed per cell while seeding and applying and at
    /// every pause; it aborts the run with `Err(Cancelled)` and leaves the
    /// buffers allocated for the next run.
    pub async fn generate<S, P>(
        &mut self,
        surface: &mut S,
        pacer: &P,
        cancel: &CancelToken,
    ) -> Result<GenerationSummary, Cancelled>
    where
        S: TileSurface + GridSize + ?Sized,
        P: Pacer,
    {
        let (width, height) = surface.dimensions();
        self.buffers.ensure_allocated(width, height);
        self.applier.reset();

        let seed = self.resolve_seed();
        let rule = ThresholdRule::new(self.config.threshold());
        log::info!(
            "generating {}x{} terrain: seed {}, fill {}%, {} iterations, threshold {}",
            width,
            height,
            seed,
            self.config.fill_percent(),
            self.config.iterations,
            rule.threshold()
        );

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        seeder::seed(&mut self.buffers.current, self.config.fill_percent(), &mut rng, cancel)?;

        let mut passes = Vec::new();
        passes.push(self.apply_and_pause(surface, pacer, cancel).await?);

        for _ in 0..self.config.iterations {
            cancel.check()?;
            stepper::step_once(
                &mut self.buffers.current,
                &mut self.buffers.scratch,
                rule,
                self.config.step_strategy,
            );
            passes.push(self.apply_and_pause(surface, pacer, cancel).await?);
        }

        log::info!(
            "generation finished: {} ground cells of {}",
            self.buffers.current.count_ground(),
            width * height
        );

        Ok(GenerationSummary {
            seed,
            dimensions: (width, height),
            steps: self.config.iterations,
            passes,
        })
    }

    fn resolve_seed(&self) -> u64 {
        if self.config.use_random_seed {
            clock_seed()
        } else {
            // Negative seeds keep their bit pattern
            self.config.seed as u64
        }
    }

    async fn apply_and_pause<S, P>(
        &mut self,
        surface: &mut S,
        pacer: &P,
        cancel: &CancelToken,
    ) -> Result<ApplyReport, Cancelled>
    where
        S: TileSurface + ?Sized,
        P: Pacer,
    {
        let report = self.applier.apply_changes(
            &self.buffers.current,
            &mut self.buffers.applied,
            surface,
            cancel,
        )?;
        log::debug!(
            "apply pass: {} changed, {} placed, {} skipped",
            report.changed,
            report.placed,
            report.skipped
        );

        if self.config.step_delay_ms > 0 {
            pacer
                .delay(Duration::from_millis(self.config.step_delay_ms), cancel)
                .await?;
        } else {
            pacer.yield_once(cancel).await?;
        }

        Ok(report)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
