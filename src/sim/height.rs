//! Flame height envelope

/// Maximum flame height per column: a downward parabola, tallest at the
/// center column and dropping below zero near the edges (those columns
/// never ignite).
#[derive(Clone, Copy)]
pub struct HeightProfile {
    rows: f64,
    cols: f64,
}

impl HeightProfile {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows as f64,
            cols: cols as f64,
        }
    }

    /// Upper bound (in rows, measured from the base) for this column's flame
    pub fn max_height(&self, col: usize) -> f64 {
        let x = col as f64 - self.cols / 2.0;
        -(1.0 / self.cols) * x * x + self.rows / 1.5
    }
}

#[cfg(test)]
mod tests {
    use super::HeightProfile;

    #[test]
    fn tallest_at_center() {
        let profile = HeightProfile::new(18, 25);
        let center = profile.max_height(12);
        for col in 0..25 {
            assert!(profile.max_height(col) <= center + 1e-9);
        }
        assert!((center - 18.0 / 1.5).abs() < 0.1);
    }

    #[test]
    fn symmetric_about_center() {
        let cols = 24;
        let profile = HeightProfile::new(18, cols);
        for col in 0..=cols / 2 {
            let left = profile.max_height(col);
            let right = profile.max_height(cols - col);
            assert!(
                (left - right).abs() < 1e-12,
                "col {} vs {}: {} != {}",
                col,
                cols - col,
                left,
                right
            );
        }
    }

    #[test]
    fn non_increasing_away_from_center() {
        let profile = HeightProfile::new(18, 25);
        // Walk rightward from the center; heights must never rise again.
        let mut prev = profile.max_height(13);
        for col in 14..25 {
            let h = profile.max_height(col);
            assert!(h <= prev);
            prev = h;
        }
    }

    #[test]
    fn edges_never_ignite_on_wide_grids() {
        let profile = HeightProfile::new(10, 60);
        assert!(profile.max_height(0) <= 0.0);
        assert!(profile.max_height(59) <= 0.0);
    }
}
