/// CellState is the two-valued terrain classification of one grid cell.
/// Stored as `bool` in the grid buffers (`true` = Ground).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellState {
    Water,
    Ground,
}

impl CellState {
    pub const fn from_bool(ground: bool) -> Self {
        if ground { CellState::Ground } else { CellState::Water }
    }

    /// Material pushed to the render surface for this state
    pub const fn material(self) -> Material {
        match self {
            CellState::Ground => Material::Ground,
            CellState::Water => Material::Water,
        }
    }
}

/// The two fixed tile materials a render surface accepts.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Material {
    Ground,
    Water,
}

impl Material {
    /// Tile asset name used by tile-based hosts
    pub const fn tile_name(self) -> &'static str {
        match self {
            Material::Ground => "Grass",
            Material::Water => "Water",
        }
    }
}
