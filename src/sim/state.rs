//! Session state
//!
//! Everything one play session owns lives on [`GameState`]: the tile grid,
//! the player, the hotbar, the placement rules, and the physics tuning.
//! Operations take the state explicitly; there is no ambient global.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::interact::PlacementRules;
use super::inventory::Inventory;
use super::physics::PhysicsTuning;
use super::worldgen::{self, WorldConfig};

/// The single player entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Column, always within the grid
    pub x: i32,
    /// Continuous row position; integral when standing on a surface
    pub y: f32,
    /// Vertical velocity, negative while rising
    pub velocity_y: f32,
}

impl Player {
    /// Spawn at `column`, two rows above the ground line, at rest
    pub fn spawn(column: i32, ground_line: i32) -> Self {
        Self {
            x: column,
            y: (ground_line - 2) as f32,
            velocity_y: 0.0,
        }
    }
}

/// Complete session state
///
/// Fields are public read surface for the view: after every tick or command
/// the host projects grid, player, and hotbar from here. Mutation goes
/// through [`tick`](super::tick::tick) and [`apply`](super::tick::apply).
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub player: Player,
    pub inventory: Inventory,
    pub rules: PlacementRules,
    pub physics: PhysicsTuning,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build a session: generate the world, spawn the player, stock the
    /// hotbar.
    pub fn new(world: &WorldConfig, physics: PhysicsTuning) -> Self {
        Self {
            grid: worldgen::generate(world),
            player: Player::spawn(world.spawn_column, world.ground_line),
            inventory: Inventory::default(),
            rules: PlacementRules::default(),
            physics,
            time_ticks: 0,
        }
    }
}
