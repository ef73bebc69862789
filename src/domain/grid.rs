/// Grid is a `width × height` boolean matrix (`true` = Ground),
/// stored flat in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell Water
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Ground test at (x, y). Out of bounds reads as Water.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[self.get_index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, ground: bool) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = ground;
        }
    }

    /// Fill every cell with the same state
    pub fn fill(&mut self, ground: bool) {
        self.cells.iter_mut().for_each(|cell| *cell = ground);
    }

    pub fn count_ground(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Share of Ground cells, 0.0 for an empty grid
    pub fn ground_fraction(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.count_ground() as f64 / self.cells.len() as f64
    }

    /// Raw row-major cells, for writers that fill whole rows at a time
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }
}

/// The three same-shaped buffers of a generation run: the live state,
/// the next-state scratch and the last-applied snapshot.
#[derive(Debug, Default)]
pub struct GridBuffers {
    pub current: Grid,
    pub scratch: Grid,
    pub applied: Grid,
    allocated: bool,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl GridBuffers {
    pub fn dimensions(&self) -> (usize, usize) {
        self.current.dimensions()
    }

    /// (Re)allocate all three buffers as Water if nothing is allocated yet
    /// or the shape differs. Returns true when a reallocation happened;
    /// an unchanged shape keeps every buffer's contents.
    pub fn ensure_allocated(&mut self, width: usize, height: usize) -> bool {
        if self.allocated && self.dimensions() == (width, height) {
            return false;
        }

        self.current = Grid::new(width, height);
        self.scratch = Grid::new(width, height);
        self.applied = Grid::new(width, height);
        self.allocated = true;
        log::debug!("allocated grid buffers {}x{}", width, height);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_get_set() {
        let mut grid = Grid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert!(!grid.get(3, 2));

        grid.set(3, 2, true);
        grid.set(0, 0, true);
        assert!(grid.get(3, 2));
        assert!(grid.get(0, 0));
        assert_eq!(grid.count_ground(), 2);
    }

    #[test]
    fn test_grid_bounds() {
        let mut grid = Grid::new(2, 2);
        grid.fill(true);

        // Out of bounds reads as Water and writes are ignored
        assert!(!grid.get(2, 0));
        assert!(!grid.get(0, 2));
        grid.set(5, 5, false);
        assert_eq!(grid.count_ground(), 4);
    }

    #[test]
    fn test_iter_cells_row_major() {
        let grid = Grid::new(2, 2);
        let coords: Vec<_> = grid.iter_cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_ground_fraction_empty_grid() {
        assert_eq!(Grid::new(0, 7).ground_fraction(), 0.0);
    }

    #[test]
    fn test_first_allocation() {
        let mut buffers = GridBuffers::default();
        assert_eq!(buffers.dimensions(), (0, 0));

        assert!(buffers.ensure_allocated(5, 4));
        assert_eq!(buffers.current.dimensions(), (5, 4));
        assert_eq!(buffers.scratch.dimensions(), (5, 4));
        assert_eq!(buffers.applied.dimensions(), (5, 4));
        assert_eq!(buffers.current.count_ground(), 0);
    }

    #[test]
    fn test_same_shape_keeps_contents() {
        let mut buffers = GridBuffers::default();
        buffers.ensure_allocated(5, 5);
        buffers.current.set(2, 3, true);
        buffers.applied.set(1, 1, true);

        assert!(!buffers.ensure_allocated(5, 5));
        assert!(buffers.current.get(2, 3));
        assert!(buffers.applied.get(1, 1));
    }

    #[test]
    fn test_shape_change_reallocates() {
        let mut buffers = GridBuffers::default();
        buffers.ensure_allocated(5, 5);
        buffers.current.fill(true);

        assert!(buffers.ensure_allocated(6, 5));
        assert_eq!(buffers.dimensions(), (6, 5));
        assert_eq!(buffers.current.count_ground(), 0);
    }

    #[test]
    fn test_zero_sized_allocation() {
        let mut buffers = GridBuffers::default();
        assert!(buffers.ensure_allocated(0, 0));
        assert!(!buffers.ensure_allocated(0, 0));
        assert_eq!(buffers.dimensions(), (0, 0));
    }
}
