//! Simulation configuration and construction-time validation

use crate::palette::{Palette, Rgb};
use std::error::Error;
use std::fmt;

/// Everything a fireplace needs at construction. Frame-to-frame behavior is
/// fully determined by these values plus the injected random source.
#[derive(Clone)]
pub struct FireplaceConfig {
    /// Grid rows; row 0 is the base of the fire
    pub rows: usize,
    /// Grid columns
    pub cols: usize,
    /// Hot-to-warm flame colors, hottest first (at least four)
    pub palette: Vec<Rgb>,
    /// Color painted for a traveling ember
    pub ember_color: Rgb,
    /// Color every cell is reset to each frame
    pub background: Rgb,
    /// Extinguish chance at the low end of the death curve
    pub min_chance: f64,
    /// Extinguish chance at the high end of the death curve
    pub max_chance: f64,
    /// Chance that a freshly dead column sheds a visible ember
    pub ember_spawn_chance: f64,
}

impl FireplaceConfig {
    /// The original 18x25 fireplace with the given colors.
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            rows: 18,
            cols: 25,
            palette: palette.colors,
            ember_color: palette.ember,
            background: palette.background,
            min_chance: 0.20,
            max_chance: 0.45,
            ember_spawn_chance: 0.4,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 1 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols < 1 {
            return Err(ConfigError::ZeroCols);
        }
        if self.palette.len() < 4 {
            return Err(ConfigError::PaletteTooSmall(self.palette.len()));
        }
        let unit = 0.0..=1.0;
        if !unit.contains(&self.min_chance)
            || !unit.contains(&self.max_chance)
            || self.min_chance > self.max_chance
        {
            return Err(ConfigError::BadChanceRange {
                min: self.min_chance,
                max: self.max_chance,
            });
        }
        if !unit.contains(&self.ember_spawn_chance) {
            return Err(ConfigError::BadSpawnChance(self.ember_spawn_chance));
        }
        Ok(())
    }
}

impl Default for FireplaceConfig {
    fn default() -> Self {
        Self::with_palette(Palette::classic())
    }
}

/// Rejected construction parameters
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroRows,
    ZeroCols,
    PaletteTooSmall(usize),
    BadChanceRange { min: f64, max: f64 },
    BadSpawnChance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroRows => write!(f, "grid needs at least one row"),
            ConfigError::ZeroCols => write!(f, "grid needs at least one column"),
            ConfigError::PaletteTooSmall(n) => {
                write!(f, "palette needs at least 4 colors, got {}", n)
            }
            ConfigError::BadChanceRange { min, max } => {
                write!(f, "death chances must satisfy 0 <= {} <= {} <= 1", min, max)
            }
            ConfigError::BadSpawnChance(p) => {
                write!(f, "ember spawn chance {} outside [0, 1]", p)
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, FireplaceConfig};

    #[test]
    fn default_config_is_valid() {
        assert!(FireplaceConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_empty_grid() {
        let mut config = FireplaceConfig::default();
        config.rows = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroRows));

        let mut config = FireplaceConfig::default();
        config.cols = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroCols));
    }

    #[test]
    fn rejects_short_palette() {
        let mut config = FireplaceConfig::default();
        config.palette.truncate(3);
        assert_eq!(config.validate(), Err(ConfigError::PaletteTooSmall(3)));
    }

    #[test]
    fn rejects_bad_chances() {
        let mut config = FireplaceConfig::default();
        config.min_chance = 0.9;
        config.max_chance = 0.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadChanceRange { .. })
        ));

        let mut config = FireplaceConfig::default();
        config.max_chance = 1.5;
        assert!(config.validate().is_err());

        let mut config = FireplaceConfig::default();
        config.min_chance = -0.1;
        assert!(config.validate().is_err());

        let mut config = FireplaceConfig::default();
        config.ember_spawn_chance = 2.0;
        assert_eq!(config.validate(), Err(ConfigError::BadSpawnChance(2.0)));
    }
}
