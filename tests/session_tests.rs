// Scripted sessions: menu input from a string, terminal output into a buffer

use rand::rngs::StdRng;
use rand::SeedableRng;
use sortviz::config::VizConfig;
use sortviz::session::{array, MenuCommand, Session};
use std::io::Cursor;

fn session(script: &str, config: VizConfig) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
    Session::with_rng(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        config,
        StdRng::seed_from_u64(1234),
    )
}

fn fast_config() -> VizConfig {
    VizConfig {
        delay_ms: 0,
        ..VizConfig::default()
    }
}

fn output_of(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(session.into_output()).expect("output is not utf-8")
}

#[test]
fn test_startup_and_quit() {
    let mut s = session("q\n", fast_config());
    s.run().expect("session failed");
    let out = output_of(s);

    assert!(out.contains("Ready. Open menu in console below."));
    assert!(out.contains("Select: "));
    assert!(out.contains("\nBye!\n"));
    assert!(out.ends_with("\x1b[?25h\x1b[0m"));
}

#[test]
fn test_end_of_input_ends_quietly() {
    let mut s = session("", fast_config());
    s.run().expect("session failed");
    let out = output_of(s);

    assert!(out.contains("Select: "));
    assert!(!out.contains("Bye!"));
    assert!(out.ends_with("\x1b[?25h\x1b[0m"));
}

#[test]
fn test_initial_array_is_permutation() {
    let s = session("", fast_config());
    assert_eq!(s.data().len(), 50);
    assert!(array::is_permutation(s.data()));
}

#[test]
fn test_sort_does_not_change_session_array() {
    let mut s = session("1\n4\n5\nq\n", fast_config());
    let before = s.data().to_vec();
    s.run().expect("session failed");
    assert_eq!(s.data(), before.as_slice());

    let out = output_of(s);
    assert!(out.contains("Bubble Sort: done"));
    assert!(out.contains("Merge Sort: done"));
    assert!(out.contains("Quick Sort: done"));
}

#[test]
fn test_shuffle_keeps_permutation() {
    let mut s = session("s\nS\nq\n", fast_config());
    s.run().expect("session failed");
    assert!(array::is_permutation(s.data()));
    assert_eq!(output_of(s).matches("Shuffled.").count(), 2);
}

#[test]
fn test_toggle_values_adds_label_line() {
    let mut s = session("v\nq\n", fast_config());
    s.run().expect("session failed");
    assert!(s.config().show_values);

    let labels: String = s
        .data()
        .iter()
        .map(|v| char::from_digit(v % 10, 10).unwrap())
        .collect();
    let out = output_of(s);
    assert!(out.contains("Show values ON"));
    assert!(out.contains("(current: ON)"));

    // Only the frame drawn after the toggle carries the digit row
    let line = format!("\n{}\n", labels);
    let ready_frame_end = out.find("Select: ").unwrap();
    assert!(!out[..ready_frame_end].contains(&line));
    assert!(out[ready_frame_end..].contains(&line));
}

#[test]
fn test_delay_adjustment() {
    let mut s = session("+\n+\n-\nq\n", fast_config());
    s.run().expect("session failed");
    assert_eq!(s.config().delay_ms, 10);

    let out = output_of(s);
    assert_eq!(out.matches("Delay increased.").count(), 2);
    assert_eq!(out.matches("Delay decreased.").count(), 1);
    assert!(out.contains("Increase delay (now: 20ms)"));
}

#[test]
fn test_delay_floor_through_menu() {
    let mut s = session("-\n-\n-\nq\n", fast_config());
    s.run().expect("session failed");
    assert_eq!(s.config().delay_ms, 0);
}

#[test]
fn test_resize_clamps_low_and_high() {
    let mut s = session("n\n1\nq\n", fast_config());
    s.run().expect("session failed");
    assert_eq!(s.config().size, 5);
    assert_eq!(s.data().len(), 5);
    assert!(array::is_permutation(s.data()));
    assert!(output_of(s).contains("Enter new N (5..200): "));

    let mut s = session("N\n9999\nq\n", fast_config());
    s.run().expect("session failed");
    assert_eq!(s.config().size, 200);
    assert_eq!(s.data().len(), 200);
    assert!(array::is_permutation(s.data()));
}

#[test]
fn test_resize_rejects_non_numeric() {
    let mut s = session("n\nlots\nq\n", fast_config());
    let before = s.data().to_vec();
    s.run().expect("session failed");

    assert_eq!(s.config().size, 50);
    assert_eq!(s.data(), before.as_slice());
    assert!(output_of(s).contains("Invalid size, keeping n=50."));
}

#[test]
fn test_resize_prompt_end_of_input() {
    let mut s = session("n\n", fast_config());
    s.run().expect("session failed");
    assert_eq!(s.config().size, 50);
    assert!(!output_of(s).contains("Bye!"));
}

#[test]
fn test_unknown_option_returns_to_menu() {
    let mut s = session("x\n\n  \nhello\n3\nq\n", fast_config());
    s.run().expect("session failed");

    let out = output_of(s);
    assert_eq!(out.matches("Unknown option.").count(), 2);
    assert!(out.contains("Selection Sort: done"));
    assert!(out.contains("Bye!"));
}

#[test]
fn test_dispatch_directly() {
    let mut s = session("", fast_config());
    assert!(s.dispatch(MenuCommand::SlowDown).unwrap().is_continue());
    assert_eq!(s.config().delay_ms, 10);
    assert!(s.dispatch(MenuCommand::Quit).unwrap().is_break());
}

#[test]
fn test_several_commands_on_one_line() {
    let mut s = session("1 2\nq\n", fast_config());
    s.run().expect("session failed");

    let out = output_of(s);
    assert!(out.contains("Bubble Sort: done"));
    assert!(out.contains("Insertion Sort: done"));
    assert!(!out.contains("Unknown option."));
}

#[test]
fn test_resize_with_size_on_same_line() {
    let mut s = session("n 30\nq\n", fast_config());
    s.run().expect("session failed");

    assert_eq!(s.config().size, 30);
    assert_eq!(s.data().len(), 30);
    assert!(!output_of(s).contains("Unknown option."));
}
