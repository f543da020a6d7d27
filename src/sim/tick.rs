//! Per-frame advance and command dispatch
//!
//! The host calls [`tick`] once per animation frame and [`apply`] once per
//! discrete input event. Both run synchronously to completion, so a tick
//! never observes a half-applied command. Requests that can't apply (jump
//! while airborne, step into a wall, out-of-range slot, a click that
//! changes nothing) return [`CommandOutcome::NotApplied`] and leave the
//! state untouched.

use glam::IVec2;

use super::interact::{self, Interaction};
use super::physics;
use super::state::GameState;

/// A discrete input event, already translated to grid terms by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Jump,
    SelectSlot(usize),
    /// Click on a grid cell; the view has already folded in any camera
    /// offset
    Interact {
        x: i32,
        y: i32,
    },
}

/// Whether a command changed the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    NotApplied,
}

/// Advance the simulation by one frame: a single vertical integration step.
pub fn tick(state: &mut GameState) {
    state.time_ticks += 1;
    physics::integrate_vertical(&mut state.player, &state.grid, &state.physics);
}

/// Apply one input event to the state.
pub fn apply(state: &mut GameState, command: Command) -> CommandOutcome {
    let applied = match command {
        Command::MoveLeft => physics::step_horizontal(&mut state.player, &state.grid, -1),
        Command::MoveRight => physics::step_horizontal(&mut state.player, &state.grid, 1),
        Command::Jump => physics::try_jump(&mut state.player, &state.grid, &state.physics),
        Command::SelectSlot(index) => state.inventory.select(index),
        Command::Interact { x, y } => {
            let result = interact::interact(
                &mut state.grid,
                &mut state.inventory,
                &state.rules,
                IVec2::new(x, y),
            );
            result != Interaction::NotApplied
        }
    };

    if applied {
        CommandOutcome::Applied
    } else {
        log::debug!("command {command:?} not applied");
        CommandOutcome::NotApplied
    }
}
