//! Terminal rendering of sorting progress
//!
//! The UI is organized into three layers:
//!
//! - **[`bars`]** — composes one frame (title, status, bars, value labels) into a
//!   ratatui [`Buffer`](ratatui::buffer::Buffer)
//! - **[`painter`]** — writes composed frames to the terminal with crossterm and
//!   paces them with the configured delay
//! - **[`theme`]** — the 256-color palette for bars and highlights
//!
//! Sorting drivers reach the terminal only through [`Painter`], which implements
//! [`Visualizer`](crate::sorting::Visualizer).

pub mod bars;
pub mod painter;
pub mod theme;

pub use painter::Painter;
