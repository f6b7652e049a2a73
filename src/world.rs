//! World geometry queries: wall tiles and playable-area bounds.

use glam::Vec2;

/// Errors raised while building a [`TileMap`].
///
/// The resolution pass itself has no failure modes; construction of the
/// static world geometry is the only fallible surface in the crate.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(f32),
    #[error("tile grid must be non-empty, got {columns}x{rows}")]
    EmptyGrid { columns: usize, rows: usize },
    #[error("tile row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Static tile geometry: a rectangular grid of wall flags.
///
/// Cell (0, 0) covers world coordinates `[0, tile_size) x [0, tile_size)`;
/// the grid extends right and down from the origin.
#[derive(Debug, Clone)]
pub struct TileMap {
    tile_size: f32,
    columns: usize,
    rows: usize,
    walls: Vec<bool>,
}

impl TileMap {
    /// Create an all-open grid of `columns x rows` square tiles.
    pub fn new(tile_size: f32, columns: usize, rows: usize) -> Result<Self, WorldError> {
        if !(tile_size > 0.0) {
            return Err(WorldError::InvalidTileSize(tile_size));
        }
        if columns == 0 || rows == 0 {
            return Err(WorldError::EmptyGrid { columns, rows });
        }
        Ok(Self {
            tile_size,
            columns,
            rows,
            walls: vec![false; columns * rows],
        })
    }

    /// Create a grid from row-major wall flags. All rows must have the same
    /// length.
    pub fn from_rows(tile_size: f32, rows: &[Vec<bool>]) -> Result<Self, WorldError> {
        let columns = rows.first().map_or(0, Vec::len);
        let mut map = Self::new(tile_size, columns, rows.len())?;
        for (y, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(WorldError::RaggedRows {
                    row: y,
                    expected: columns,
                    found: row.len(),
                });
            }
            map.walls[y * columns..(y + 1) * columns].copy_from_slice(row);
        }
        Ok(map)
    }

    /// Mark or clear the wall flag of a cell. Out-of-grid indices are
    /// ignored.
    pub fn set_wall(&mut self, column: usize, row: usize, solid: bool) {
        if column < self.columns && row < self.rows {
            self.walls[row * self.columns + column] = solid;
        }
    }

    /// Wall flag of a cell. Out-of-grid indices are open.
    pub fn is_wall(&self, column: usize, row: usize) -> bool {
        column < self.columns && row < self.rows && self.walls[row * self.columns + column]
    }

    /// World-space size of the tile area.
    pub fn area_size(&self) -> Vec2 {
        Vec2::new(
            self.columns as f32 * self.tile_size,
            self.rows as f32 * self.tile_size,
        )
    }

    /// Wall flag at a world-space point. Points outside the grid are open.
    pub fn is_wall_at(&self, point: Vec2) -> bool {
        let column = (point.x / self.tile_size).floor();
        let row = (point.y / self.tile_size).floor();
        if column < 0.0 || row < 0.0 {
            return false;
        }
        self.is_wall(column as usize, row as usize)
    }
}

/// Boundary context for a resolution pass: optional tile geometry plus the
/// viewport size used as the playable-area fallback.
#[derive(Debug, Clone)]
pub struct WorldContext {
    tiles: Option<TileMap>,
    viewport: Vec2,
}

impl WorldContext {
    /// Context without tile geometry. Wall queries report no walls; bounds
    /// derive from the viewport.
    pub fn new(viewport: Vec2) -> Self {
        Self {
            tiles: None,
            viewport,
        }
    }

    /// Context with a loaded tile map. Bounds derive from the tile area.
    pub fn with_tiles(viewport: Vec2, tiles: TileMap) -> Self {
        Self {
            tiles: Some(tiles),
            viewport,
        }
    }

    /// True iff the tile geometry marks this point solid. Without a tile
    /// map, always false.
    pub fn is_on_wall_tile(&self, point: Vec2) -> bool {
        match &self.tiles {
            Some(tiles) => tiles.is_wall_at(point),
            None => false,
        }
    }

    /// True iff a body centered at `point` with the given half extents
    /// leaves the playable area.
    ///
    /// Unlike the wall query, this never degrades to "no": without a tile
    /// map the viewport size bounds the area instead.
    pub fn is_out_of_bounds(&self, point: Vec2, half_extents: Vec2) -> bool {
        let extent = self.area_extent();
        point.x < half_extents.x
            || point.x > extent.x - half_extents.x
            || point.y < half_extents.y
            || point.y > extent.y - half_extents.y
    }

    /// Clamp a body center into the playable area. A no-op when the point is
    /// already in range.
    pub fn clamp_to_bounds(&self, point: Vec2, half_extents: Vec2) -> Vec2 {
        let extent = self.area_extent();
        Vec2::new(
            point.x.max(half_extents.x).min(extent.x - half_extents.x),
            point.y.max(half_extents.y).min(extent.y - half_extents.y),
        )
    }

    fn area_extent(&self) -> Vec2 {
        match &self.tiles {
            Some(tiles) => tiles.area_size(),
            None => self.viewport,
        }
    }
}
