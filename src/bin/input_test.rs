//! Key polling diagnostic.
//!
//! Puts the terminal in raw mode and prints every polled key together with
//! the command it maps to. Press `q` (or Ctrl-C) to exit.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::terminal;

use cotton::input::{command_for_key, sleep_ms, KeySource, TerminalKeys};
use cotton::types::{Command, TICK_MS};

fn main() -> Result<()> {
    env_logger::init();

    terminal::enable_raw_mode()?;
    let result = run();

    // Always try to restore terminal state.
    let _ = terminal::disable_raw_mode();
    result
}

fn run() -> Result<()> {
    let mut keys = TerminalKeys::new();
    let mut stdout = io::stdout();

    write!(stdout, "polling keys every {TICK_MS}ms, q to quit\r\n")?;
    stdout.flush()?;

    loop {
        if let Some(key) = keys.poll_key() {
            let command = command_for_key(Some(key));
            let name = command.map(|c| c.as_str()).unwrap_or("-");
            write!(stdout, "{:?} (0x{:02x}) => {}\r\n", key, key as u32, name)?;
            stdout.flush()?;

            if command == Some(Command::Quit) {
                return Ok(());
            }
        }
        sleep_ms(TICK_MS);
    }
}
