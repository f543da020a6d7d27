//! Gravity integration and grid collision
//!
//! The player is one column wide with a continuous vertical position. Each
//! tick applies gravity to the vertical velocity, clamps it to terminal fall
//! speed, and moves by a fixed sub-step of the velocity, colliding against
//! the tile grid. Horizontal motion is not integrated at all: it is a
//! discrete single-column step that either fully happens or fully doesn't.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::state::Player;
use crate::consts;

/// What happens when a rising player's head meets a solid tile.
///
/// The two behaviors both exist in the wild; pick per world. `Halt` keeps
/// the position where it was for the tick, `Drift` still takes the candidate
/// position and only kills the velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CeilingPolicy {
    #[default]
    Halt,
    Drift,
}

/// Integrator parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsTuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Terminal fall speed; only the fall direction is clamped
    pub max_fall_speed: f32,
    /// Velocity set by a grounded jump (negative = up)
    pub jump_impulse: f32,
    /// Fraction of velocity applied to position per tick
    pub step_scale: f32,
    pub ceiling_policy: CeilingPolicy,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: consts::GRAVITY,
            max_fall_speed: consts::MAX_FALL_SPEED,
            jump_impulse: consts::JUMP_IMPULSE,
            step_scale: consts::STEP_SCALE,
            ceiling_policy: CeilingPolicy::default(),
        }
    }
}

/// Advance the player's vertical position by one tick.
///
/// Falling collides against the tile under the candidate position and lands
/// flush on the surface, discarding fractional overshoot. Rising collides at
/// the candidate row itself and resolves per [`CeilingPolicy`]. The final
/// position is always clamped into the grid, even when a boundary case
/// bypasses a collision check.
pub fn integrate_vertical(player: &mut Player, grid: &Grid, tuning: &PhysicsTuning) {
    player.velocity_y += tuning.gravity;
    if player.velocity_y > tuning.max_fall_speed {
        player.velocity_y = tuning.max_fall_speed;
    }

    let candidate = player.y + player.velocity_y * tuning.step_scale;

    if player.velocity_y > 0.0 {
        if grid.is_solid(player.x, candidate.floor() as i32 + 1) {
            player.velocity_y = 0.0;
            player.y = candidate.floor();
        } else {
            player.y = candidate;
        }
    } else if player.velocity_y < 0.0 {
        if grid.is_solid(player.x, candidate.floor() as i32) {
            player.velocity_y = 0.0;
            if tuning.ceiling_policy == CeilingPolicy::Drift {
                player.y = candidate;
            }
        } else {
            player.y = candidate;
        }
    }

    let floor_row = (grid.height() - 1).max(0) as f32;
    player.y = player.y.clamp(0.0, floor_row);
}

/// Step one column left (`dx = -1`) or right (`dx = 1`).
///
/// The destination column is tested at every row the body currently
/// overlaps (head and foot), so a mid-fall player can't clip through a
/// one-tile-thick wall. Returns whether the step was taken.
pub fn step_horizontal(player: &mut Player, grid: &Grid, dx: i32) -> bool {
    let dest = player.x + dx;
    let head_row = player.y.floor() as i32;
    let foot_row = player.y.ceil() as i32;
    if grid.is_solid(dest, head_row) || grid.is_solid(dest, foot_row) {
        return false;
    }
    player.x = dest;
    true
}

/// Jump if grounded: the tile directly under the foot must be solid.
/// Airborne requests are ignored. Returns whether the impulse was applied.
pub fn try_jump(player: &mut Player, grid: &Grid, tuning: &PhysicsTuning) -> bool {
    if !grid.is_solid(player.x, player.y.floor() as i32 + 1) {
        return false;
    }
    player.velocity_y = tuning.jump_impulse;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::TileKind;
    use crate::sim::worldgen::{self, WorldConfig};

    fn flat_world() -> Grid {
        worldgen::generate(&WorldConfig::flat())
    }

    fn player_at(x: i32, y: f32) -> Player {
        Player {
            x,
            y,
            velocity_y: 0.0,
        }
    }

    #[test]
    fn test_fall_lands_flush_on_surface() {
        let grid = flat_world();
        let tuning = PhysicsTuning::default();
        let mut player = player_at(10, 5.0);

        for _ in 0..200 {
            integrate_vertical(&mut player, &grid, &tuning);
        }

        // Resting on top of the grass row at y=7.
        assert_eq!(player.y, 6.0);
        assert_eq!(player.velocity_y, 0.0);
    }

    #[test]
    fn test_fall_speed_is_clamped() {
        let grid = Grid::new(3, 100);
        let tuning = PhysicsTuning::default();
        let mut player = player_at(1, 0.0);

        for _ in 0..100 {
            integrate_vertical(&mut player, &grid, &tuning);
            assert!(player.velocity_y <= tuning.max_fall_speed);
        }
    }

    #[test]
    fn test_jump_direction_is_never_clamped() {
        let grid = Grid::new(3, 100);
        let tuning = PhysicsTuning::default();
        let mut player = player_at(1, 50.0);
        player.velocity_y = -20.0;

        integrate_vertical(&mut player, &grid, &tuning);
        // Gravity applies, but no clamp toward zero.
        assert_eq!(player.velocity_y, -20.0 + tuning.gravity);
    }

    #[test]
    fn test_ceiling_halt_keeps_position() {
        let mut grid = Grid::new(3, 10);
        grid.set(1, 3, TileKind::Dirt);
        let tuning = PhysicsTuning::default();

        let mut player = player_at(1, 4.2);
        player.velocity_y = -6.0;

        integrate_vertical(&mut player, &grid, &tuning);
        // candidate = 4.2 - 0.57 = 3.63, head row 3 is solid.
        assert_eq!(player.velocity_y, 0.0);
        assert_eq!(player.y, 4.2);
    }

    #[test]
    fn test_ceiling_drift_takes_candidate() {
        let mut grid = Grid::new(3, 10);
        grid.set(1, 3, TileKind::Dirt);
        let tuning = PhysicsTuning {
            ceiling_policy: CeilingPolicy::Drift,
            ..PhysicsTuning::default()
        };

        let mut player = player_at(1, 4.2);
        player.velocity_y = -6.0;

        integrate_vertical(&mut player, &grid, &tuning);
        assert_eq!(player.velocity_y, 0.0);
        let expected = 4.2 + (-6.0 + tuning.gravity) * tuning.step_scale;
        assert!((player.y - expected).abs() < 1e-6);
    }

    #[test]
    fn test_position_clamped_to_world() {
        let grid = Grid::new(3, 10);
        let tuning = PhysicsTuning::default();

        let mut player = player_at(1, 0.0);
        player.velocity_y = -50.0;
        // No ceiling anywhere; rising past the top row clamps to 0.
        integrate_vertical(&mut player, &grid, &tuning);
        assert_eq!(player.y, 0.0);

        let mut player = player_at(1, 9.0);
        player.velocity_y = 50.0;
        integrate_vertical(&mut player, &grid, &tuning);
        assert!(player.y <= 9.0);
    }

    #[test]
    fn test_step_rejected_into_wall() {
        let mut grid = flat_world();
        grid.set(11, 6, TileKind::Dirt);
        let mut player = player_at(10, 6.0);

        assert!(!step_horizontal(&mut player, &grid, 1));
        assert_eq!(player.x, 10);
        assert!(step_horizontal(&mut player, &grid, -1));
        assert_eq!(player.x, 9);
    }

    #[test]
    fn test_step_rejected_at_world_edge() {
        let grid = flat_world();
        let mut player = player_at(0, 6.0);
        assert!(!step_horizontal(&mut player, &grid, -1));
        assert_eq!(player.x, 0);
    }

    #[test]
    fn test_step_checks_both_overlapped_rows() {
        // Player mid-fall at y=5.4 overlaps rows 5 and 6; a wall tile in
        // either row must block the step.
        let mut grid = flat_world();
        grid.set(11, 6, TileKind::Dirt);
        let mut player = player_at(10, 5.4);
        assert!(!step_horizontal(&mut player, &grid, 1));

        let mut grid = flat_world();
        grid.set(11, 5, TileKind::Dirt);
        let mut player = player_at(10, 5.4);
        assert!(!step_horizontal(&mut player, &grid, 1));
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let grid = flat_world();
        let tuning = PhysicsTuning::default();

        let mut grounded = player_at(10, 6.0);
        assert!(try_jump(&mut grounded, &grid, &tuning));
        assert_eq!(grounded.velocity_y, tuning.jump_impulse);

        let mut airborne = player_at(10, 3.0);
        airborne.velocity_y = 1.5;
        assert!(!try_jump(&mut airborne, &grid, &tuning));
        assert_eq!(airborne.velocity_y, 1.5);
    }
}
