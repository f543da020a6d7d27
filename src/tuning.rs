//! Data-driven world and physics balance
//!
//! Hosts tweak the game by editing a JSON blob rather than recompiling.
//! Everything here round-trips through serde; unknown worlds fall back to
//! the stock flat one.

use serde::{Deserialize, Serialize};

use crate::sim::{GameState, PhysicsTuning, WorldConfig};

/// Aggregate tuning: world shape plus integrator parameters
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tuning {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub physics: PhysicsTuning,
}

impl Tuning {
    /// The larger wooded world with stock physics
    pub fn wooded() -> Self {
        Self {
            world: WorldConfig::wooded(),
            physics: PhysicsTuning::default(),
        }
    }

    /// Parse a tuning blob. Missing sections take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Start a session from this tuning
    pub fn new_session(&self) -> GameState {
        GameState::new(&self.world, self.physics)
    }
}
