//! Flame pixel color selection

use crate::palette::Rgb;
use crate::rng::Sampler;

/// Weights aligned to rotated palette positions. The zero tail keeps the two
/// coolest rotated slots out of the draw entirely.
const SLOT_WEIGHTS: [u32; 6] = [50, 25, 15, 10, 0, 0];

/// Picks a flame color for a lit cell, biased by the cell's distance below
/// the column's height bound: near the tip the hottest color dominates,
/// farther down the palette rotates so warmer entries take the heavy slots.
#[derive(Clone)]
pub struct FlamePicker {
    colors: Vec<Rgb>,
    weights: Vec<u32>,
}

impl FlamePicker {
    /// `colors` must hold at least one entry with a nonzero slot weight
    /// (guaranteed by config validation, which requires four).
    pub fn new(colors: Vec<Rgb>) -> Self {
        let weights = (0..colors.len())
            .map(|i| SLOT_WEIGHTS.get(i).copied().unwrap_or(0))
            .collect();
        Self { colors, weights }
    }

    /// How far the palette rotates rightward for a cell `bound_delta` rows
    /// below its column's bound.
    fn rotation(&self, bound_delta: f64) -> usize {
        ((bound_delta as usize + 1) / 2) % self.colors.len()
    }

    /// Pick the color for a cell `bound_delta` (> 0) below the bound.
    pub fn pick<S: Sampler>(&self, bound_delta: f64, rng: &mut S) -> Rgb {
        let len = self.colors.len();
        let rot = self.rotation(bound_delta);
        let slot = rng.weighted(&self.weights);
        // Rightward rotation by `rot` puts original index (slot - rot) mod len
        // into the drawn slot.
        self.colors[(slot + len - rot) % len]
    }
}
