use super::Material;

/// Provider of the logical grid dimensions, queried once per run.
pub trait GridSize {
    fn dimensions(&self) -> (usize, usize);
}

/// External tile surface the generator pushes cell materials to.
pub trait TileSurface {
    type Cell;

    /// Resolve (x, y) to a renderable cell, or None when the coordinate
    /// lies outside the renderable region
    fn cell_at(&self, x: usize, y: usize) -> Option<Self::Cell>;

    /// Place `material` onto `cell`, replacing any existing tile when
    /// `overwrite` is set
    fn place(&mut self, cell: Self::Cell, material: Material, overwrite: bool);
}
