// Bounds and defaults for the visualizer configuration

/// Smallest array size the session will generate
pub const MIN_SIZE: usize = 5;

/// Largest array size the session will generate
pub const MAX_SIZE: usize = 200;

/// Array size at startup
pub const DEFAULT_SIZE: usize = 50;

/// Frame delay at startup, in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 20;

/// Step applied by the `+` and `-` menu keys
pub const DELAY_STEP_MS: u64 = 10;

/// Upper bound for the frame delay
pub const MAX_DELAY_MS: u64 = 1000;

/// Tallest bar, in terminal rows
pub const DEFAULT_MAX_BAR_HEIGHT: u16 = 20;
