//! Hearth: a flickering fireplace for the terminal
//!
//! The simulation lives in [`sim`]; everything else is plumbing around it.
//! A [`sim::FrameGenerator`] produces RGB pixel grids on demand, driven by
//! an injectable random source, and the display loop paints them with
//! half-block characters.

pub mod config;
pub mod display;
pub mod palette;
pub mod rng;
pub mod sim;
pub mod terminal;

pub use config::{ConfigError, FireplaceConfig};
pub use palette::{Palette, Rgb};
pub use sim::{Frame, FrameGenerator};
