//! Break/place resolution
//!
//! One click, one tile: a non-Empty target breaks into the inventory, an
//! Empty target takes the selected kind out of it. Everything that can't
//! apply (off-grid target, exhausted stock, a kind's placement rule not
//! met) resolves to `NotApplied` with no state change; none of these are
//! errors.

use glam::IVec2;

use super::grid::{Grid, TileKind};
use super::inventory::Inventory;

/// Per-kind placement precondition, checked against the target cell before
/// any state changes
pub type PlacementPredicate = fn(&Grid, IVec2) -> bool;

/// Placement preconditions keyed by tile kind.
///
/// Kinds without an entry place anywhere that is Empty. The stock table has
/// one rule: leaves need something to hang on.
#[derive(Debug, Clone)]
pub struct PlacementRules {
    rules: Vec<(TileKind, PlacementPredicate)>,
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self {
            rules: vec![(TileKind::Leaves, supported_below)],
        }
    }
}

impl PlacementRules {
    /// A table with no preconditions at all
    pub fn permissive() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register (or replace) the rule for `kind`
    pub fn register(&mut self, kind: TileKind, rule: PlacementPredicate) {
        match self.rules.iter_mut().find(|(k, _)| *k == kind) {
            Some(entry) => entry.1 = rule,
            None => self.rules.push((kind, rule)),
        }
    }

    /// Whether `kind` may be placed at `target`
    pub fn allows(&self, kind: TileKind, grid: &Grid, target: IVec2) -> bool {
        self.rules
            .iter()
            .find(|(k, _)| *k == kind)
            .is_none_or(|(_, rule)| rule(grid, target))
    }
}

/// The tile immediately below the target holds the placed tile up.
/// The boundary wall counts, so the bottom row is always supported.
fn supported_below(grid: &Grid, target: IVec2) -> bool {
    grid.is_solid(target.x, target.y + 1)
}

/// What an interaction did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Tile broken and banked; carries the kind that was mined
    Broke(TileKind),
    /// Selected kind placed; stock decremented
    Placed(TileKind),
    /// Nothing changed
    NotApplied,
}

/// Resolve a click on `target`, already translated to grid coordinates by
/// the view: occupied tiles break, empty tiles take the selected kind.
pub fn interact(
    grid: &mut Grid,
    inventory: &mut Inventory,
    rules: &PlacementRules,
    target: IVec2,
) -> Interaction {
    match grid.get(target.x, target.y) {
        Some(TileKind::Empty) => place_tile(grid, inventory, rules, target),
        Some(_) => break_tile(grid, inventory, target),
        None => Interaction::NotApplied,
    }
}

/// Break the tile at `target` into the inventory. Empty or off-grid
/// targets change nothing.
pub fn break_tile(grid: &mut Grid, inventory: &mut Inventory, target: IVec2) -> Interaction {
    match grid.get(target.x, target.y) {
        Some(kind) if kind != TileKind::Empty => {
            inventory.deposit(kind);
            grid.set(target.x, target.y, TileKind::Empty);
            Interaction::Broke(kind)
        }
        _ => Interaction::NotApplied,
    }
}

/// Place the selected kind at `target`. Occupied or off-grid targets,
/// exhausted stock, and unmet placement rules all change nothing.
pub fn place_tile(
    grid: &mut Grid,
    inventory: &mut Inventory,
    rules: &PlacementRules,
    target: IVec2,
) -> Interaction {
    if grid.get(target.x, target.y) != Some(TileKind::Empty) {
        return Interaction::NotApplied;
    }
    let Some(kind) = inventory.selected_kind() else {
        return Interaction::NotApplied;
    };
    if !rules.allows(kind, grid, target) {
        log::debug!("placement of {} at {} rejected by rule", kind.as_str(), target);
        return Interaction::NotApplied;
    }
    if !inventory.withdraw(kind) {
        return Interaction::NotApplied;
    }
    grid.set(target.x, target.y, kind);
    Interaction::Placed(kind)
}
