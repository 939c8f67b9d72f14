// sortviz: step-by-step terminal visualization of sorting algorithms

use std::io;

use crossterm::{
    cursor::Show,
    execute,
    style::ResetColor,
};
use log::LevelFilter;

use sortviz::session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Quiet by default so log lines don't land on top of frames
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_env("SORTVIZ_LOG")
        .init();

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    let res = session.run();

    // Restore terminal
    let mut stdout = session.into_output();
    execute!(stdout, Show, ResetColor)?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
