//! Deterministic world generation
//!
//! Terrain is a flat profile: air above the ground line, a grass row at the
//! line, dirt below. Decorative trees are stamped at fixed anchor columns;
//! anchors are configuration, not computed, so two generations from the same
//! config always produce identical tile arrays.

use serde::{Deserialize, Serialize};

use super::grid::{Grid, TileKind};
use crate::consts;

/// World shape and terrain parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: i32,
    pub height: i32,
    /// Row index where terrain starts: this row is grass, rows below dirt
    pub ground_line: i32,
    /// Columns that receive a tree
    pub tree_anchors: Vec<i32>,
    /// Column the player spawns in
    pub spawn_column: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::flat()
    }
}

impl WorldConfig {
    /// The original fixed 20x10 world: bare terrain, no trees
    pub fn flat() -> Self {
        Self {
            width: consts::WORLD_COLS,
            height: consts::WORLD_ROWS,
            ground_line: consts::GROUND_LINE,
            tree_anchors: Vec::new(),
            spawn_column: consts::WORLD_COLS / 2,
        }
    }

    /// A wider world with a handful of trees, sized for a scrolling view
    pub fn wooded() -> Self {
        Self {
            width: 64,
            height: 16,
            ground_line: 11,
            tree_anchors: vec![7, 19, 33, 49],
            spawn_column: 26,
        }
    }
}

/// Build a fresh grid from `config`
pub fn generate(config: &WorldConfig) -> Grid {
    let mut grid = Grid::new(config.width, config.height);
    populate(&mut grid, config);
    grid
}

/// Fill `grid` from `config`, overwriting any prior contents.
///
/// The grid is cleared first so regeneration never leaves residue from an
/// earlier state. Tree pieces that fall outside the grid clip silently via
/// `Grid::set`.
pub fn populate(grid: &mut Grid, config: &WorldConfig) {
    grid.clear();

    for y in 0..grid.height() {
        if y < config.ground_line {
            continue;
        }
        let kind = if y == config.ground_line {
            TileKind::Grass
        } else {
            TileKind::Dirt
        };
        for x in 0..grid.width() {
            grid.set(x, y, kind);
        }
    }

    for &anchor in &config.tree_anchors {
        plant_tree(grid, anchor, config.ground_line);
    }

    log::info!(
        "generated {}x{} world, ground line {}, {} trees",
        grid.width(),
        grid.height(),
        config.ground_line,
        config.tree_anchors.len()
    );
}

/// Stamp one tree: a two-tile dirt trunk on the ground line, two leaves on
/// top, and a leaf on each side of the upper trunk tile.
fn plant_tree(grid: &mut Grid, anchor: i32, ground_line: i32) {
    grid.set(anchor, ground_line - 1, TileKind::Dirt);
    grid.set(anchor, ground_line - 2, TileKind::Dirt);
    grid.set(anchor, ground_line - 3, TileKind::Leaves);
    grid.set(anchor, ground_line - 4, TileKind::Leaves);
    grid.set(anchor - 1, ground_line - 2, TileKind::Leaves);
    grid.set(anchor + 1, ground_line - 2, TileKind::Leaves);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_profile() {
        let grid = generate(&WorldConfig::flat());

        for x in 0..grid.width() {
            for y in 0..consts::GROUND_LINE {
                assert_eq!(grid.get(x, y), Some(TileKind::Empty), "air at ({x},{y})");
            }
            assert_eq!(grid.get(x, consts::GROUND_LINE), Some(TileKind::Grass));
            for y in consts::GROUND_LINE + 1..grid.height() {
                assert_eq!(grid.get(x, y), Some(TileKind::Dirt), "dirt at ({x},{y})");
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = WorldConfig::wooded();
        assert_eq!(generate(&config), generate(&config));
    }

    #[test]
    fn test_tree_shape() {
        let config = WorldConfig {
            width: 16,
            height: 12,
            ground_line: 8,
            tree_anchors: vec![6],
            spawn_column: 2,
        };
        let grid = generate(&config);

        // Trunk
        assert_eq!(grid.get(6, 7), Some(TileKind::Dirt));
        assert_eq!(grid.get(6, 6), Some(TileKind::Dirt));
        // Crown
        assert_eq!(grid.get(6, 5), Some(TileKind::Leaves));
        assert_eq!(grid.get(6, 4), Some(TileKind::Leaves));
        // Canopy beside the upper trunk tile
        assert_eq!(grid.get(5, 6), Some(TileKind::Leaves));
        assert_eq!(grid.get(7, 6), Some(TileKind::Leaves));
        // The column next to the canopy stays clear
        assert_eq!(grid.get(4, 6), Some(TileKind::Empty));
    }

    #[test]
    fn test_tree_at_edge_clips_silently() {
        let config = WorldConfig {
            width: 8,
            height: 10,
            ground_line: 7,
            tree_anchors: vec![0],
            spawn_column: 4,
        };
        let grid = generate(&config);
        // The left canopy leaf falls off-grid; the rest is intact.
        assert_eq!(grid.get(0, 6), Some(TileKind::Dirt));
        assert_eq!(grid.get(1, 5), Some(TileKind::Leaves));
    }

    #[test]
    fn test_populate_overwrites_prior_state() {
        let config = WorldConfig::flat();
        let mut grid = generate(&config);

        // Scribble over the world, then regenerate.
        grid.set(3, 1, TileKind::Leaves);
        grid.set(5, consts::GROUND_LINE, TileKind::Empty);
        populate(&mut grid, &config);

        assert_eq!(grid, generate(&config));
    }
}
