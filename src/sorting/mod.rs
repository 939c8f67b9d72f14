//! Instrumented sorting algorithms
//!
//! Every driver takes its array by value, sorts it in place, and reports each
//! meaningful state change (comparison, swap, shift, placement, merge copy) to a
//! [`Visualizer`] before returning the sorted copy:
//!
//! - [`bubble`]: adjacent swaps with early exit
//! - [`insertion`]: stable shift-right insertion
//! - [`selection`]: one swap per pass after a linear min scan
//! - [`merge`]: top-down, stable, `<=` tie-break toward the left run
//! - [`quick`]: Lomuto partition around the last element
//! - [`heap`]: bottom-up max-heap build, then repeated root extraction
//!
//! # Frame contract
//!
//! A frame carries the array as it is right now, up to three highlighted
//! indices and a status line. Each driver finishes with one `"<Name>: done"`
//! frame that has no highlights.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use std::fmt;
use std::io;

/// Role of a highlighted index, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Primary,
    Secondary,
    Tertiary,
}

/// Up to three highlighted positions for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlights {
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
    pub tertiary: Option<usize>,
}

impl Highlights {
    pub fn new(primary: Option<usize>, secondary: Option<usize>, tertiary: Option<usize>) -> Self {
        Highlights {
            primary,
            secondary,
            tertiary,
        }
    }

    /// No highlighted positions
    pub fn none() -> Self {
        Self::default()
    }

    pub fn pair(primary: usize, secondary: usize) -> Self {
        Self::new(Some(primary), Some(secondary), None)
    }

    pub fn triple(primary: usize, secondary: usize, tertiary: usize) -> Self {
        Self::new(Some(primary), Some(secondary), Some(tertiary))
    }

    /// Role of `index`, first match wins when indices collide
    pub fn role_at(&self, index: usize) -> Option<Role> {
        if self.primary == Some(index) {
            Some(Role::Primary)
        } else if self.secondary == Some(index) {
            Some(Role::Secondary)
        } else if self.tertiary == Some(index) {
            Some(Role::Tertiary)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none() && self.tertiary.is_none()
    }
}

/// Receiver of algorithm progress.
///
/// The terminal painter implements this to draw and pace frames; tests
/// implement it to record the frame sequence.
pub trait Visualizer {
    fn frame(&mut self, data: &[u32], highlights: Highlights, status: &str) -> io::Result<()>;
}

/// The six menu-selectable algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// Map a menu digit (`'1'..='6'`) to its algorithm
    pub fn from_menu_key(key: char) -> Option<Self> {
        let index = key.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Menu digit for this algorithm
    pub fn menu_key(self) -> char {
        match self {
            Algorithm::Bubble => '1',
            Algorithm::Insertion => '2',
            Algorithm::Selection => '3',
            Algorithm::Merge => '4',
            Algorithm::Quick => '5',
            Algorithm::Heap => '6',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    /// Sort `data` (already a copy) while reporting progress to `viz`
    pub fn run<V: Visualizer>(self, data: Vec<u32>, viz: &mut V) -> io::Result<Vec<u32>> {
        match self {
            Algorithm::Bubble => bubble::sort(data, viz),
            Algorithm::Insertion => insertion::sort(data, viz),
            Algorithm::Selection => selection::sort(data, viz),
            Algorithm::Merge => merge::sort(data, viz),
            Algorithm::Quick => quick::sort(data, viz),
            Algorithm::Heap => heap::sort(data, viz),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Emit the closing frame shared by every driver
pub(crate) fn finish<V: Visualizer>(
    algorithm: Algorithm,
    data: &[u32],
    viz: &mut V,
) -> io::Result<()> {
    viz.frame(data, Highlights::none(), &format!("{}: done", algorithm.name()))
}
