//! Tile grid storage and solidity queries
//!
//! The world is a fixed-size row-major array of tile kinds. Coordinates are
//! signed so callers can probe neighbors freely: everything outside the grid
//! reads as solid, a conservative boundary wall that keeps the player and
//! placement logic from ever being evaluated off the map.

use serde::{Deserialize, Serialize};

/// Kind of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Empty,
    Grass,
    Dirt,
    Leaves,
}

impl TileKind {
    /// Solid tiles block movement and support placement
    #[inline]
    pub fn is_solid(self) -> bool {
        self != TileKind::Empty
    }

    /// Display name (hotbar labels, debug projection)
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Empty => "empty",
            TileKind::Grass => "grass",
            TileKind::Dirt => "dirt",
            TileKind::Leaves => "leaves",
        }
    }
}

/// Fixed-size 2D tile array, row-major, `(0, 0)` at the top-left
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<TileKind>,
}

impl Grid {
    /// Create an all-Empty grid. Zero or negative dimensions collapse to an
    /// empty grid where every query hits the boundary wall.
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            width,
            height,
            tiles: vec![TileKind::Empty; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// True outside the grid, or on any non-Empty tile
    #[inline]
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        match self.get(x, y) {
            Some(kind) => kind.is_solid(),
            None => true,
        }
    }

    /// Current kind at `(x, y)`, `None` out of bounds
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<TileKind> {
        if self.in_bounds(x, y) {
            Some(self.tiles[self.index(x, y)])
        } else {
            None
        }
    }

    /// Overwrite the tile at `(x, y)`; silent no-op out of bounds.
    /// Inventory bookkeeping is the interaction resolver's job, not ours.
    pub fn set(&mut self, x: i32, y: i32, kind: TileKind) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.tiles[idx] = kind;
        }
    }

    /// Reset every tile to Empty
    pub fn clear(&mut self) {
        self.tiles.fill(TileKind::Empty);
    }

    /// Number of tiles of `kind` currently on the grid
    pub fn count_of(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&t| t == kind).count()
    }
}
