//! # Introduction
//!
//! sortviz animates classic comparison sorts in a terminal. Each algorithm is
//! instrumented to report every comparison, swap and placement; each report is
//! drawn as a full-screen bar chart with up to three highlighted columns, then
//! held on screen for a fixed delay.
//!
//! ## Pipeline
//!
//! ```text
//! Session → Algorithm (owns a copy) → Visualizer → Painter → terminal
//! ```
//!
//! 1. [`session`] — the interactive menu; owns the array and [`config::VizConfig`].
//! 2. [`sorting`] — bubble, insertion, selection, merge, quick and heap sort,
//!    each reporting to a [`sorting::Visualizer`].
//! 3. [`ui`] — composes frames with [ratatui](https://docs.rs/ratatui) buffers
//!    and writes them with crossterm.
//!
//! ## Menu
//!
//! `1`-`6` run an algorithm, `s` shuffles, `v` toggles value labels, `+`/`-`
//! change the delay by 10ms, `n` picks a new size (5..200), `q` quits.

pub mod config;
pub mod constants;
pub mod session;
pub mod sorting;
pub mod ui;
