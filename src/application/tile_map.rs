use crate::domain::{GridSize, Material, TileSurface};

/// Handle to one renderable tile of a `TileMap`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileHandle(usize);

/// In-memory tile surface. The logical grid may be larger than the
/// renderable region; coordinates outside the region do not resolve.
#[derive(Clone, Debug)]
pub struct TileMap {
    width: usize,
    height: usize,
    renderable_width: usize,
    renderable_height: usize,
    tiles: Vec<Option<Material>>,
    placements: u64,
}

impl TileMap {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_renderable_region(width, height, width, height)
    }

    pub fn with_renderable_region(
        width: usize,
        height: usize,
        renderable_width: usize,
        renderable_height: usize,
    ) -> Self {
        let renderable_width = renderable_width.min(width);
        let renderable_height = renderable_height.min(height);
        Self {
            width,
            height,
            renderable_width,
            renderable_height,
            tiles: vec![None; renderable_width * renderable_height],
            placements: 0,
        }
    }

    pub fn renderable_region(&self) -> (usize, usize) {
        (self.renderable_width, self.renderable_height)
    }

    /// Material at (x, y), None when unpainted or outside the region
    pub fn tile(&self, x: usize, y: usize) -> Option<Material> {
        self.cell_at(x, y).and_then(|TileHandle(idx)| self.tiles[idx])
    }

    /// Total placements since creation
    pub fn placements(&self) -> u64 {
        self.placements
    }

    pub fn count(&self, material: Material) -> usize {
        self.tiles.iter().filter(|tile| **tile == Some(material)).count()
    }

    pub fn clear(&mut self) {
        self.tiles.iter_mut().for_each(|tile| *tile = None);
    }
}

impl GridSize for TileMap {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

impl TileSurface for TileMap {
    type Cell = TileHandle;

    fn cell_at(&self, x: usize, y: usize) -> Option<TileHandle> {
        (x < self.renderable_width && y < self.renderable_height)
            .then(|| TileHandle(y * self.renderable_width + x))
    }

    fn place(&mut self, cell: TileHandle, material: Material, overwrite: bool) {
        let tile = &mut self.tiles[cell.0];
        if overwrite || tile.is_none() {
            *tile = Some(material);
            self.placements += 1;
        }
    }
}
