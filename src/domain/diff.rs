use super::{CancelToken, Cancelled, CellState, Grid, TileSurface};

/// Counters for one apply pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Cells visited
    pub examined: usize,
    /// Cells that had to be pushed (changed, or first pass)
    pub changed: usize,
    /// Pushes that reached the surface
    pub placed: usize,
    /// Pushes dropped because the surface could not resolve the cell
    pub skipped: usize,
}

/// Pushes only the cells whose state differs from the last-applied
/// snapshot. The first pass of a run pushes every cell.
#[derive(Debug, Default)]
pub struct DiffApplier {
    has_applied_once: bool,
}

impl DiffApplier {
    pub fn has_applied_once(&self) -> bool {
        self.has_applied_once
    }

    /// Force the next pass to push every cell
    pub fn reset(&mut self) {
        self.has_applied_once = false;
    }

    /// Compare `current` against `snapshot` row-major and place the
    /// material of every cell that must be applied. A cell is recorded in
    /// the snapshot only once it reached the surface, so an unresolvable
    /// cell is retried on a later pass if it still differs.
    pub fn apply_changes<S: TileSurface + ?Sized>(
        &mut self,
        current: &Grid,
        snapshot: &mut Grid,
        surface: &mut S,
        cancel: &CancelToken,
    ) -> Result<ApplyReport, Cancelled> {
        debug_assert_eq!(current.dimensions(), snapshot.dimensions());

        let mut report = ApplyReport::default();
        let (width, height) = current.dimensions();

        for y in 0..height {
            for x in 0..width {
                cancel.check()?;
                report.examined += 1;

                let desired = current.get(x, y);
                let must_apply = !self.has_applied_once || snapshot.get(x, y) != desired;
                if !must_apply {
                    continue;
                }
                report.changed += 1;

                let Some(cell) = surface.cell_at(x, y) else {
                    report.skipped += 1;
                    continue;
                };

                surface.place(cell, CellState::from_bool(desired).material(), true);
                snapshot.set(x, y, desired);
                report.placed += 1;
            }
        }

        self.has_applied_once = true;
        Ok(report)
    }
}
