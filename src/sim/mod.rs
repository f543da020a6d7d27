//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One integration step per host frame, fixed sub-step scale
//! - Stable slot order (hotbar order never reshuffles)
//! - No rendering or platform dependencies
//!
//! Input reaches the core only as discrete [`Command`]s, applied atomically
//! between ticks; the view never observes a half-applied command.

pub mod grid;
pub mod interact;
pub mod inventory;
pub mod physics;
pub mod state;
pub mod tick;
pub mod worldgen;

pub use grid::{Grid, TileKind};
pub use interact::{Interaction, PlacementRules, break_tile, interact, place_tile};
pub use inventory::{Inventory, Slot};
pub use physics::{CeilingPolicy, PhysicsTuning};
pub use state::{GameState, Player};
pub use tick::{Command, CommandOutcome, apply, tick};
pub use worldgen::{WorldConfig, generate, populate};
