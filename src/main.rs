//! Cotton framebuffer runner (default binary).
//!
//! Draws the sprite straight onto `/dev/fb0` (or `COTTON_FB_DEVICE`) and
//! reads single keys from the controlling terminal:
//!
//! - `j` / `l`: close or open the left / right eye
//! - `w` `a` `s` `d`: look up / left / down / right
//! - `q` (or Ctrl-C): clear the screen and exit
//!
//! Raw mode also turns off output processing, so log lines printed while
//! the loop runs (e.g. with `RUST_LOG=debug`) have no carriage return;
//! redirect stderr to a file to read them.

use anyhow::{Context, Result};

use cotton::engine::{Controller, LoopConfig};
use cotton::input::TerminalKeys;
use cotton::term::{DisplaySession, SessionConfig};

fn main() -> Result<()> {
    env_logger::init();

    let session_config = SessionConfig::from_env();
    let loop_config = LoopConfig::from_env();

    // Fails before the terminal mode is touched.
    let session = DisplaySession::open(&session_config)
        .with_context(|| format!("cannot start on {}", session_config.device.display()))?;

    let mut controller = Controller::new(session, loop_config)?;
    let result = controller.run(&mut TerminalKeys::new());

    // Dropping the session on an error path restores the terminal as well.
    let session = controller.into_presenter();
    result?;
    session.shutdown()?;
    Ok(())
}
