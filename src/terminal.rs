//! Back-buffered terminal renderer
//!
//! Frames are drawn as RGB "pixels": each terminal cell shows two grid rows
//! using the upper-half block, foreground for the top pixel and background
//! for the bottom one.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event, KeyCode, KeyModifiers},
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, stdout, Write};
use std::time::Duration;

use crate::palette::Rgb;

const HALF_BLOCK: char = '▀';

/// A single cell in the back buffer
#[derive(Clone, PartialEq)]
struct Cell {
    ch: char,
    fg: Option<Color>,
    bg: Option<Color>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bg: None,
        }
    }
}

/// Terminal abstraction for rendering
pub struct Terminal {
    width: u16,
    height: u16,
    buffer: Vec<Vec<Cell>>,
}

impl Terminal {
    /// Enter raw mode on the alternate screen with the cursor hidden.
    pub fn new() -> io::Result<Self> {
        let (width, height) = size()?;
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        let buffer = vec![vec![Cell::default(); width as usize]; height as usize];
        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    /// Get terminal dimensions
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Adopt a new terminal size, dropping the old buffer contents
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.buffer = vec![vec![Cell::default(); width as usize]; height as usize];
    }

    /// Clear the back buffer
    pub fn clear(&mut self) {
        for row in &mut self.buffer {
            row.fill(Cell::default());
        }
    }

    /// Clear the actual terminal
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(stdout(), Clear(ClearType::All))?;
        Ok(())
    }

    /// Draw a vertical pair of pixels into one terminal cell; `top` sits
    /// above `bottom` on screen.
    pub fn set_pixel_pair(&mut self, x: i32, y: i32, top: Rgb, bottom: Rgb) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.buffer[y as usize][x as usize] = Cell {
                ch: HALF_BLOCK,
                fg: Some(rgb(top)),
                bg: Some(rgb(bottom)),
            };
        }
    }

    /// Set a plain string starting at position (status lines)
    pub fn set_str(&mut self, x: i32, y: i32, s: &str, fg: Option<Color>) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x + i as i32;
            if cx >= 0 && cx < self.width as i32 && y >= 0 && y < self.height as i32 {
                self.buffer[y as usize][cx as usize] = Cell { ch, fg, bg: None };
            }
        }
    }

    /// Render the back buffer to the screen
    pub fn present(&self) -> io::Result<()> {
        let mut stdout = stdout();
        for (y, row) in self.buffer.iter().enumerate() {
            execute!(stdout, MoveTo(0, y as u16))?;
            for cell in row {
                match (cell.fg, cell.bg) {
                    (Some(fg), Some(bg)) => execute!(
                        stdout,
                        SetForegroundColor(fg),
                        SetBackgroundColor(bg),
                        Print(cell.ch),
                        ResetColor
                    )?,
                    (Some(fg), None) => {
                        execute!(stdout, SetForegroundColor(fg), Print(cell.ch), ResetColor)?
                    }
                    _ => execute!(stdout, Print(cell.ch))?,
                }
            }
        }
        stdout.flush()?;
        Ok(())
    }

    /// Check for keypress (non-blocking), returns (code, modifiers)
    pub fn check_key(&self) -> io::Result<Option<(KeyCode, KeyModifiers)>> {
        if poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = read()? {
                return Ok(Some((key_event.code, key_event.modifiers)));
            }
        }
        Ok(None)
    }

    /// Sleep for specified duration
    pub fn sleep(&self, seconds: f32) {
        std::thread::sleep(Duration::from_secs_f32(seconds));
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Helper to convert palette pixels to crossterm colors
pub fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}
