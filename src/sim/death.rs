//! Extinguish-probability table

/// Chance returned for a distance outside the precomputed `[0, rows)` domain.
const OUT_OF_RANGE_CHANCE: f64 = 0.5;

/// Per-row extinguish probabilities, precomputed once at construction and
/// indexed by the integer distance below a column's height bound.
#[derive(Clone)]
pub struct DeathChanceTable {
    chances: Vec<f64>,
}

impl DeathChanceTable {
    /// Build the table for a grid of `rows` rows. Distances in the upper
    /// half of the envelope (beyond `rows / 2`) never extinguish; below
    /// that the chance interpolates between `min_chance` and `max_chance`.
    pub fn new(rows: usize, min_chance: f64, max_chance: f64) -> Self {
        let threshold = rows / 2;
        let span = (rows - threshold) as f64;
        let chances = (0..rows)
            .map(|d| {
                if d > threshold {
                    0.0
                } else {
                    let offset = d as f64 - threshold as f64;
                    (min_chance + (max_chance - min_chance) * offset / span).abs()
                }
            })
            .collect();
        Self { chances }
    }

    /// Extinguish chance for integer distance `d` below the bound.
    pub fn lookup(&self, d: usize) -> f64 {
        self.chances.get(d).copied().unwrap_or(OUT_OF_RANGE_CHANCE)
    }
}
