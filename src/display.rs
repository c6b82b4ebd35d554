//! Interactive display loop
//!
//! Pulls one frame per tick from the generator and paints it centered on
//! the terminal. The loop owns pacing and input; the simulation knows
//! nothing about either.

use crate::config::FireplaceConfig;
use crate::palette::Rgb;
use crate::sim::{Frame, FrameGenerator};
use crate::terminal::Terminal;
use crossterm::event::{KeyCode, KeyModifiers};
use std::io;

/// Runtime state for interactive controls
struct LoopState {
    speed: f32,
    paused: bool,
}

impl LoopState {
    fn new(initial_speed: f32) -> Self {
        Self {
            speed: initial_speed,
            paused: false,
        }
    }

    /// Handle keypress, returns true if should quit
    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            // Number keys: change speed (1=fastest, 9=slowest, 0=default)
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let n = c.to_digit(10).unwrap() as u8;
                self.speed = match n {
                    0 => 0.1,
                    1 => 0.02,
                    2 => 0.04,
                    3 => 0.06,
                    4 => 0.08,
                    5 => 0.1,
                    6 => 0.15,
                    7 => 0.2,
                    8 => 0.3,
                    9 => 0.5,
                    _ => self.speed,
                };
            }
            _ => {}
        }
        false
    }
}

/// Run the fireplace until the user quits.
pub fn run(config: &FireplaceConfig, seed: Option<u64>, time_step: f32) -> io::Result<()> {
    let mut gen = FrameGenerator::seeded(config, seed)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let mut term = Terminal::new()?;
    let mut state = LoopState::new(time_step);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or_else(|_| term.size());
        if (w, h) != term.size() {
            term.resize(w, h);
            term.clear_screen()?;
        }

        if let Some((code, mods)) = term.check_key()? {
            if state.handle_key(code, mods) {
                break;
            }
        }

        if state.paused {
            term.set_str(0, 0, "paused - space resumes, q quits", None);
            term.present()?;
            term.sleep(0.1);
            continue;
        }

        let frame = gen.next_frame();
        term.clear();
        blit(&mut term, &frame, config.background);
        term.present()?;
        term.sleep(state.speed);
    }

    Ok(())
}

/// Paint a frame centered on the terminal, flipped so the base of the fire
/// is at the bottom, two grid rows per terminal cell row.
fn blit(term: &mut Terminal, frame: &Frame, background: Rgb) {
    let (w, h) = term.size();
    let rows = frame.rows();
    let cols = frame.cols();
    let cell_rows = (rows + 1) / 2;
    let x0 = (w as i32 - cols as i32) / 2;
    let y0 = (h as i32 - cell_rows as i32) / 2;

    for t in 0..cell_rows {
        // topmost cell row shows the two highest grid rows
        let hi = rows - 1 - 2 * t;
        for col in 0..cols {
            let top_px = frame.get(hi, col);
            let bottom_px = if hi >= 1 {
                frame.get(hi - 1, col)
            } else {
                background
            };
            term.set_pixel_pair(x0 + col as i32, y0 + t as i32, top_px, bottom_px);
        }
    }
}
