//! Process-lifetime visualizer configuration
//!
//! [`VizConfig`] is owned by the session and handed to the renderer by shared
//! reference for every frame. There are no configuration files; every field is
//! changed through the menu, and every change goes through a clamping method
//! here so the bounds in [`crate::constants`] always hold.

use crate::constants::{
    DEFAULT_DELAY_MS, DEFAULT_MAX_BAR_HEIGHT, DEFAULT_SIZE, DELAY_STEP_MS, MAX_DELAY_MS,
    MAX_SIZE, MIN_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VizConfig {
    /// Number of elements in the array
    pub size: usize,
    /// Blocking delay after each frame, in milliseconds
    pub delay_ms: u64,
    /// Print the last digit of each value under its bar
    pub show_values: bool,
    /// Height of the tallest bar, in rows
    pub max_bar_height: u16,
}

impl Default for VizConfig {
    fn default() -> Self {
        VizConfig {
            size: DEFAULT_SIZE,
            delay_ms: DEFAULT_DELAY_MS,
            show_values: false,
            max_bar_height: DEFAULT_MAX_BAR_HEIGHT,
        }
    }
}

impl VizConfig {
    /// Slow the animation down by one step, capped at [`MAX_DELAY_MS`]
    pub fn increase_delay(&mut self) {
        self.delay_ms = (self.delay_ms + DELAY_STEP_MS).min(MAX_DELAY_MS);
    }

    /// Speed the animation up by one step, floored at zero
    pub fn decrease_delay(&mut self) {
        self.delay_ms = self.delay_ms.saturating_sub(DELAY_STEP_MS);
    }

    /// Flip the value-label line on or off, returning the new state
    pub fn toggle_values(&mut self) -> bool {
        self.show_values = !self.show_values;
        self.show_values
    }

    /// Set the array size, clamped to `[MIN_SIZE, MAX_SIZE]`
    pub fn resize(&mut self, requested: i64) -> usize {
        self.size = clamp_size(requested);
        self.size
    }
}

/// Clamp a requested array size into the supported range.
///
/// Accepts a signed value because the operator can type anything, including
/// negative numbers.
pub fn clamp_size(requested: i64) -> usize {
    requested.clamp(MIN_SIZE as i64, MAX_SIZE as i64) as usize
}
