//! Flame palettes
//!
//! A palette is ordered hot-to-warm: slot 0 is the color of the flame tip,
//! later slots are rotated in closer to the base.

/// One RGB pixel
pub type Rgb = (u8, u8, u8);

/// A flame palette plus the colors that sit outside the weighted draw
#[derive(Clone)]
pub struct Palette {
    pub colors: Vec<Rgb>,
    pub ember: Rgb,
    pub background: Rgb,
}

impl Palette {
    /// The original fireplace colors: bright yellow tip fading to orange.
    pub fn classic() -> Self {
        Self {
            colors: vec![
                (251, 237, 83),
                (248, 221, 78),
                (246, 201, 73),
                (244, 183, 68),
                (255, 159, 56),
                (241, 146, 63),
            ],
            ember: (194, 84, 35),
            background: (0, 0, 0),
        }
    }

    /// Cold blue flames with pale gray embers.
    pub fn ice() -> Self {
        Self {
            colors: vec![
                (225, 245, 255),
                (180, 225, 250),
                (130, 195, 245),
                (90, 160, 235),
                (65, 120, 215),
                (50, 90, 190),
            ],
            ember: (160, 170, 190),
            background: (0, 0, 0),
        }
    }

    /// Magenta/violet flames.
    pub fn neon() -> Self {
        Self {
            colors: vec![
                (255, 240, 250),
                (255, 180, 240),
                (245, 120, 225),
                (215, 80, 205),
                (170, 55, 185),
                (120, 40, 160),
            ],
            ember: (90, 200, 230),
            background: (0, 0, 0),
        }
    }

    /// Look up a preset by name (case-insensitive); None if unknown.
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "classic" | "fire" => Some(Self::classic()),
            "ice" | "blue" => Some(Self::ice()),
            "neon" | "pink" => Some(Self::neon()),
            _ => None,
        }
    }
}
