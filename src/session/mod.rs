//! Interactive session: owns the array and configuration, runs the menu loop
//!
//! - [`array`]: permutation generation and shuffling
//! - [`menu`]: menu text and [`MenuCommand`] parsing
//!
//! # Lifecycle
//!
//! The session sits at the menu until a command arrives. Sorting commands hand
//! a clone of the array to the chosen driver and block until every frame has
//! been drawn; the session's own array is never changed by a sort. End of
//! input behaves like `q` without the farewell line.

pub mod array;
pub mod menu;

pub use menu::MenuCommand;

use crate::config::VizConfig;
use crate::sorting::{Highlights, Visualizer};
use crate::ui::Painter;
use crossterm::{
    cursor::Show,
    execute, queue,
    style::{Print, ResetColor},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

pub struct Session<R: BufRead, W: Write> {
    input: R,
    out: W,
    config: VizConfig,
    data: Vec<u32>,
    rng: StdRng,
    /// Tokens read but not yet consumed
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with default configuration and an entropy-seeded shuffle
    pub fn new(input: R, out: W) -> Self {
        Self::with_rng(input, out, VizConfig::default(), StdRng::from_entropy())
    }

    /// Create a session with an explicit configuration and random source
    pub fn with_rng(input: R, out: W, config: VizConfig, mut rng: StdRng) -> Self {
        let data = array::generate(config.size, &mut rng);
        Session {
            input,
            out,
            config,
            data,
            rng,
            pending: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &VizConfig {
        &self.config
    }

    /// The current array
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Give back the output stream, e.g. to restore the terminal after an error
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the menu loop until `q` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        self.show("Ready. Open menu in console below.")?;

        loop {
            menu::print_menu(&mut self.out, &self.config)?;
            let Some(token) = self.read_token()? else {
                log::debug!("input closed at menu");
                break;
            };
            if self.dispatch(MenuCommand::parse(&token))?.is_break() {
                break;
            }
        }

        execute!(self.out, Show, ResetColor)
    }

    /// Apply one command. `Break` ends the session.
    pub fn dispatch(&mut self, command: MenuCommand) -> io::Result<ControlFlow<()>> {
        log::debug!("menu command: {:?}", command);

        match command {
            MenuCommand::Sort(algorithm) => {
                log::info!("running {} on {} elements", algorithm, self.data.len());
                let mut painter = Painter::new(&mut self.out, &self.config);
                algorithm.run(self.data.clone(), &mut painter)?;
                log::info!("{} finished after {} frames", algorithm, painter.frames());
            }
            MenuCommand::Shuffle => {
                array::shuffle(&mut self.data, &mut self.rng);
                self.show("Shuffled.")?;
            }
            MenuCommand::ToggleValues => {
                let state = if self.config.toggle_values() { "ON" } else { "OFF" };
                self.show(&format!("Show values {}", state))?;
            }
            MenuCommand::SlowDown => {
                self.config.increase_delay();
                self.show("Delay increased.")?;
            }
            MenuCommand::SpeedUp => {
                self.config.decrease_delay();
                self.show("Delay decreased.")?;
            }
            MenuCommand::Resize => {
                queue!(self.out, Print("Enter new N (5..200): "))?;
                self.out.flush()?;
                let Some(token) = self.read_token()? else {
                    log::debug!("input closed at size prompt");
                    return Ok(ControlFlow::Break(()));
                };
                match token.parse::<i64>() {
                    Ok(requested) => {
                        let size = self.config.resize(requested);
                        self.data = array::generate(size, &mut self.rng);
                        self.show("Size changed and shuffled.")?;
                    }
                    Err(_) => {
                        log::debug!("rejected size input {:?}", token);
                        self.show(&format!("Invalid size, keeping n={}.", self.config.size))?;
                    }
                }
            }
            MenuCommand::Quit => {
                queue!(self.out, Show, ResetColor, Print("\nBye!\n"))?;
                self.out.flush()?;
                return Ok(ControlFlow::Break(()));
            }
            MenuCommand::Unknown(_) => {
                self.show("Unknown option.")?;
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Draw the current array with a status line and no highlights
    fn show(&mut self, status: &str) -> io::Result<()> {
        Painter::new(&mut self.out, &self.config).frame(&self.data, Highlights::none(), status)
    }

    /// Next whitespace-separated input token. `None` at end of input.
    ///
    /// A line may carry several tokens (`1 2`, `n 30`); the rest are queued
    /// for the following reads.
    fn read_token(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}
