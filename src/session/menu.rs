//! Menu text and command parsing

use crate::config::VizConfig;
use crate::sorting::Algorithm;
use crossterm::{cursor::Show, queue, style::Print};
use std::io::{self, Write};

/// One operator command read at the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    Sort(Algorithm),
    Shuffle,
    ToggleValues,
    SlowDown,
    SpeedUp,
    Resize,
    Quit,
    Unknown(String),
}

impl MenuCommand {
    /// Parse one trimmed input token. Letters are case-insensitive.
    pub fn parse(input: &str) -> Self {
        let mut chars = input.chars();
        let (Some(key), None) = (chars.next(), chars.next()) else {
            return MenuCommand::Unknown(input.to_string());
        };

        if let Some(algorithm) = Algorithm::from_menu_key(key) {
            return MenuCommand::Sort(algorithm);
        }
        match key.to_ascii_lowercase() {
            's' => MenuCommand::Shuffle,
            'v' => MenuCommand::ToggleValues,
            '+' => MenuCommand::SlowDown,
            '-' => MenuCommand::SpeedUp,
            'n' => MenuCommand::Resize,
            'q' => MenuCommand::Quit,
            _ => MenuCommand::Unknown(input.to_string()),
        }
    }
}

/// Print the menu below the last frame, with the cursor visible for input
pub fn print_menu<W: Write>(out: &mut W, config: &VizConfig) -> io::Result<()> {
    let values = if config.show_values { "ON" } else { "OFF" };
    let mut text = String::from("\n");
    text.push_str("+----------------------------------------------+\n");
    text.push_str("|           Sorting Visualizer (ANSI)          |\n");
    text.push_str("+----------------------------------------------+\n");
    for algorithm in Algorithm::ALL {
        text.push_str(&format!(" {}) {}\n", algorithm.menu_key(), algorithm.name()));
    }
    text.push_str(" s) Shuffle array\n");
    text.push_str(&format!(" v) Toggle show values (current: {})\n", values));
    text.push_str(&format!(" +) Increase delay (now: {}ms)\n", config.delay_ms));
    text.push_str(&format!(" -) Decrease delay (now: {}ms)\n", config.delay_ms));
    text.push_str(&format!(" n) Change N (now: {})\n", config.size));
    text.push_str(" q) Quit\n");
    text.push_str("Select: ");

    queue!(out, Show, Print(text))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        assert_eq!(MenuCommand::parse("1"), MenuCommand::Sort(Algorithm::Bubble));
        assert_eq!(MenuCommand::parse("5"), MenuCommand::Sort(Algorithm::Quick));
        assert_eq!(MenuCommand::parse("6"), MenuCommand::Sort(Algorithm::Heap));
        assert_eq!(MenuCommand::parse("7"), MenuCommand::Unknown("7".into()));
    }

    #[test]
    fn test_parse_letters_case_insensitive() {
        assert_eq!(MenuCommand::parse("s"), MenuCommand::Shuffle);
        assert_eq!(MenuCommand::parse("S"), MenuCommand::Shuffle);
        assert_eq!(MenuCommand::parse("V"), MenuCommand::ToggleValues);
        assert_eq!(MenuCommand::parse("N"), MenuCommand::Resize);
        assert_eq!(MenuCommand::parse("Q"), MenuCommand::Quit);
        assert_eq!(MenuCommand::parse("+"), MenuCommand::SlowDown);
        assert_eq!(MenuCommand::parse("-"), MenuCommand::SpeedUp);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(MenuCommand::parse("x"), MenuCommand::Unknown("x".into()));
        assert_eq!(MenuCommand::parse("12"), MenuCommand::Unknown("12".into()));
        assert_eq!(MenuCommand::parse("quit"), MenuCommand::Unknown("quit".into()));
    }

    #[test]
    fn test_menu_shows_live_values() {
        let config = VizConfig {
            size: 42,
            delay_ms: 130,
            show_values: true,
            ..VizConfig::default()
        };
        let mut out = Vec::new();
        print_menu(&mut out, &config).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("\x1b[?25h"));
        assert!(text.contains(" 4) Merge Sort\n"));
        assert!(text.contains("(current: ON)"));
        assert!(text.contains("Increase delay (now: 130ms)"));
        assert!(text.contains("Change N (now: 42)"));
        assert!(text.ends_with("Select: "));
    }
}
