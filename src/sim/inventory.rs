//! Hotbar inventory and block selection
//!
//! A small ordered list of slots, one per block kind the player has ever
//! held, plus the selected slot index. Counts are unsigned and withdrawals
//! refuse at zero, so stock can never go negative. Slot order is stable:
//! new kinds append, nothing reshuffles.

use serde::{Deserialize, Serialize};

use super::grid::TileKind;
use crate::consts;

/// One hotbar slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub kind: TileKind,
    pub count: u32,
}

/// Block stock and the current hotbar selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<Slot>,
    selected: usize,
}

impl Default for Inventory {
    /// The starting hotbar: grass, dirt, and an empty leaves slot
    fn default() -> Self {
        Self::new(vec![
            (TileKind::Grass, consts::START_GRASS),
            (TileKind::Dirt, consts::START_DIRT),
            (TileKind::Leaves, consts::START_LEAVES),
        ])
    }
}

impl Inventory {
    pub fn new(stock: Vec<(TileKind, u32)>) -> Self {
        Self {
            slots: stock
                .into_iter()
                .map(|(kind, count)| Slot { kind, count })
                .collect(),
            selected: 0,
        }
    }

    /// Slots in hotbar order (the render feed for the hotbar view)
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Kind in the selected slot, `None` if the hotbar is empty
    pub fn selected_kind(&self) -> Option<TileKind> {
        self.slots.get(self.selected).map(|slot| slot.kind)
    }

    /// Current stock of `kind`; zero for kinds never held
    pub fn count(&self, kind: TileKind) -> u32 {
        self.slots
            .iter()
            .find(|slot| slot.kind == kind)
            .map_or(0, |slot| slot.count)
    }

    /// Add one `kind`, appending a slot on first pickup
    pub fn deposit(&mut self, kind: TileKind) {
        match self.slots.iter_mut().find(|slot| slot.kind == kind) {
            Some(slot) => slot.count += 1,
            None => self.slots.push(Slot { kind, count: 1 }),
        }
    }

    /// Remove one `kind`; refused (false) when stock is exhausted
    pub fn withdraw(&mut self, kind: TileKind) -> bool {
        match self.slots.iter_mut().find(|slot| slot.kind == kind) {
            Some(slot) if slot.count > 0 => {
                slot.count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Select a hotbar slot; out-of-range indices are rejected
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.slots.len() {
            return false;
        }
        self.selected = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_stock() {
        let inv = Inventory::default();
        assert_eq!(inv.count(TileKind::Grass), 5);
        assert_eq!(inv.count(TileKind::Dirt), 10);
        assert_eq!(inv.count(TileKind::Leaves), 0);
        assert_eq!(inv.selected_kind(), Some(TileKind::Grass));
    }

    #[test]
    fn test_withdraw_refuses_at_zero() {
        let mut inv = Inventory::default();
        assert!(!inv.withdraw(TileKind::Leaves));
        assert_eq!(inv.count(TileKind::Leaves), 0);

        for _ in 0..5 {
            assert!(inv.withdraw(TileKind::Grass));
        }
        assert!(!inv.withdraw(TileKind::Grass));
        assert_eq!(inv.count(TileKind::Grass), 0);
    }

    #[test]
    fn test_deposit_appends_new_kind() {
        let mut inv = Inventory::new(vec![(TileKind::Grass, 1)]);
        assert_eq!(inv.count(TileKind::Dirt), 0);

        inv.deposit(TileKind::Dirt);
        assert_eq!(inv.count(TileKind::Dirt), 1);
        assert_eq!(inv.slots().len(), 2);
        // Existing slot order untouched.
        assert_eq!(inv.slots()[0].kind, TileKind::Grass);
    }

    #[test]
    fn test_select_rejects_out_of_range() {
        let mut inv = Inventory::default();
        assert!(inv.select(2));
        assert_eq!(inv.selected_kind(), Some(TileKind::Leaves));

        assert!(!inv.select(3));
        assert_eq!(inv.selected_index(), 2);
    }

    #[test]
    fn test_empty_hotbar_has_no_selection() {
        let inv = Inventory::new(Vec::new());
        assert_eq!(inv.selected_kind(), None);
    }
}
