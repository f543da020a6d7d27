//! Tilefall - a tiny 2D block breaking/placing sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tile grid, gravity physics, interaction)
//! - `tuning`: Data-driven world and physics balance
//!
//! Rendering, camera math, and raw input handling live in the host view
//! (see `src/main.rs` for a headless example). The view translates pointer
//! and key events into [`sim::Command`]s and projects the state after each
//! tick; the simulation itself never touches a platform API.

pub mod sim;
pub mod tuning;

pub use sim::{Command, CommandOutcome, GameState, Grid, TileKind, tick};
pub use tuning::Tuning;

/// Game configuration constants
///
/// Baseline values for the stock world; `tuning` wraps these in
/// serde-loadable structs so hosts can override them.
pub mod consts {
    /// Downward acceleration per tick (rows/tick²)
    pub const GRAVITY: f32 = 0.3;
    /// Terminal fall speed (rows/tick); the jump direction is never clamped
    pub const MAX_FALL_SPEED: f32 = 5.0;
    /// Vertical velocity applied on a grounded jump (negative = up)
    pub const JUMP_IMPULSE: f32 = -6.0;
    /// Sub-step scale applied to velocity when integrating position.
    /// Decouples the tick rate from the grid's unit scale.
    pub const STEP_SCALE: f32 = 0.1;

    /// Stock flat world dimensions
    pub const WORLD_COLS: i32 = 20;
    pub const WORLD_ROWS: i32 = 10;
    /// Row at which terrain switches from air to ground
    pub const GROUND_LINE: i32 = 7;

    /// Starting hotbar stock
    pub const START_GRASS: u32 = 5;
    pub const START_DIRT: u32 = 10;
    pub const START_LEAVES: u32 = 0;
}
