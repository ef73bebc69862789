use super::Grid;

/// Largest possible Moore neighbor count
pub const MAX_NEIGHBORS: u8 = 8;

/// Count Ground cells among the 8 Moore neighbors of (x, y).
/// Neighbors outside the grid are absent and never count as Ground,
/// so edges and corners drift toward Water over successive steps.
pub fn count_ground_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (w, h) = grid.dimensions();
    let (w, h) = (w as isize, h as isize);

    (-1isize..=1)
        .flat_map(|dy| (-1isize..=1).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .map(|(dx, dy)| (x as isize + dx, y as isize + dy))
        .filter(|&(nx, ny)| nx >= 0 && nx < w && ny >= 0 && ny < h)
        .filter(|&(nx, ny)| grid.get(nx as usize, ny as usize))
        .count() as u8
}

/// The smoothing rule: a cell becomes Ground iff at least `threshold`
/// of its neighbors are Ground. The current state of the cell itself
/// plays no part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThresholdRule {
    threshold: u8,
}

impl ThresholdRule {
    /// Threshold is clamped to [0, 8]
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold: threshold.min(MAX_NEIGHBORS),
        }
    }

    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    #[inline]
    pub fn decide(&self, ground_neighbors: u8) -> bool {
        ground_neighbors >= self.threshold
    }

    /// Next state of (x, y), reading only `grid`
    #[inline]
    pub fn next_state(&self, grid: &Grid, x: usize, y: usize) -> bool {
        self.decide(count_ground_neighbors(grid, x, y))
    }
}

impl Default for ThresholdRule {
    fn default() -> Self {
        Self::new(4)
    }
}
