//! Traveling ember state
//!
//! Two independent markers per column, both rising one row per frame:
//! `ember` is painted wherever it sits, `base ember` is never painted and
//! only suppresses flame pixels at its row, leaving a dark streak that
//! climbs through the flame. This is the only state that survives between
//! frames.

use crate::rng::Sampler;

/// Per-column spawn chance for a base ember, drawn once per frame at row 0.
const BASE_SPAWN_CHANCE: f64 = 0.02;

/// Per-column ember and base-ember positions (`None` = inactive).
#[derive(Clone, Debug, PartialEq)]
pub struct EmberField {
    rows: usize,
    embers: Vec<Option<usize>>,
    base_embers: Vec<Option<usize>>,
    spawn_chance: f64,
}

impl EmberField {
    /// `spawn_chance` is the probability that a freshly dead column sheds a
    /// visible ember.
    pub fn new(rows: usize, cols: usize, spawn_chance: f64) -> Self {
        Self {
            rows,
            embers: vec![None; cols],
            base_embers: vec![None; cols],
            spawn_chance,
        }
    }

    /// Lift every active marker one row; markers that pass the top row go
    /// inactive. Called once at the start of each frame.
    pub fn advance(&mut self) {
        let rows = self.rows;
        for slot in self.embers.iter_mut().chain(self.base_embers.iter_mut()) {
            if let Some(row) = *slot {
                *slot = if row + 1 >= rows { None } else { Some(row + 1) };
            }
        }
    }

    /// Row-0 spawn draw for the invisible base ember. A success overwrites
    /// any base ember already climbing this column.
    pub fn maybe_spawn_base<S: Sampler>(&mut self, col: usize, rng: &mut S) {
        if rng.chance(BASE_SPAWN_CHANCE) {
            self.base_embers[col] = Some(0);
        }
    }

    /// Spawn draw for the visible ember, invoked when a column dies at
    /// `row`. Only one ember per column may be airborne; returns true if a
    /// new one lit up (the caller paints the cell immediately).
    pub fn maybe_spawn<S: Sampler>(&mut self, col: usize, row: usize, rng: &mut S) -> bool {
        if self.embers[col].is_none() && rng.chance(self.spawn_chance) {
            self.embers[col] = Some(row);
            true
        } else {
            false
        }
    }

    /// Current row of the visible ember in `col`, if any
    pub fn ember_at(&self, col: usize) -> Option<usize> {
        self.embers[col]
    }

    /// Current row of the base ember in `col`, if any
    pub fn base_at(&self, col: usize) -> Option<usize> {
        self.base_embers[col]
    }

    /// True when no marker of either kind is active
    pub fn is_quiet(&self) -> bool {
        self.embers.iter().all(Option::is_none) && self.base_embers.iter().all(Option::is_none)
    }
}
