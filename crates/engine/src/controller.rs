//! Fixed-cadence control loop.
//!
//! Each tick polls at most one key, applies it, redraws the eyes if the
//! state changed, presents the frame, and sleeps for the tick interval. The
//! sleep is the loop's only blocking point.

use anyhow::{Context, Result};

use crate::config::LoopConfig;
use crate::core::{Present, Surface};
use crate::input::{command_for_key, sleep_ms, KeySource};
use crate::scene::{draw_cotton, update_cotton};
use crate::state::{ControlState, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Exiting,
}

pub struct Controller<P: Present> {
    presenter: P,
    frame: Surface,
    state: ControlState,
    config: LoopConfig,
    ticks: u64,
    redraws: u64,
}

impl<P: Present> Controller<P> {
    /// Draw the sprite into a fresh off-screen frame and present it.
    pub fn new(mut presenter: P, config: LoopConfig) -> Result<Self> {
        let mut frame = presenter.create_buffer();
        draw_cotton(&mut frame);
        presenter
            .present(&frame)
            .context("failed to present initial frame")?;

        Ok(Self {
            presenter,
            frame,
            state: ControlState::new(),
            config,
            ticks: 0,
            redraws: 0,
        })
    }

    /// Process one key (or none) and present the frame.
    ///
    /// Quit clears the frame, presents the blank frame, and reports
    /// [`LoopState::Exiting`]; nothing else is processed on that tick.
    pub fn tick(&mut self, key: Option<char>) -> Result<LoopState> {
        self.ticks += 1;

        if let Some(command) = command_for_key(key) {
            match self.state.apply(command) {
                Transition::Exit => {
                    self.frame.clear();
                    self.presenter
                        .present(&self.frame)
                        .context("failed to present final frame")?;
                    return Ok(LoopState::Exiting);
                }
                Transition::Changed => {
                    log::debug!("{} -> {:?}", command.as_str(), self.state);
                    update_cotton(&mut self.frame, &self.state);
                    self.redraws += 1;
                }
                Transition::Unchanged => {}
            }
        }

        self.presenter.present(&self.frame)?;
        Ok(LoopState::Running)
    }

    /// Run until the quit key, pacing every tick by the configured interval.
    pub fn run(&mut self, keys: &mut impl KeySource) -> Result<()> {
        loop {
            let key = keys.poll_key();
            if self.tick(key)? == LoopState::Exiting {
                log::info!("quit after {} ticks, {} redraws", self.ticks, self.redraws);
                return Ok(());
            }
            sleep_ms(self.config.tick_ms);
        }
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn frame(&self) -> &Surface {
        &self.frame
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    /// Hand the presenter back for shutdown.
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryDisplay;
    use crate::input::ScriptedKeys;
    use crate::types::{FrameGeometry, Palette};

    fn controller() -> Controller<MemoryDisplay> {
        let display = MemoryDisplay::new(FrameGeometry::packed(640, 480));
        Controller::new(display, LoopConfig::unpaced()).unwrap()
    }

    #[test]
    fn new_presents_initial_sprite() {
        let c = controller();
        assert_eq!(c.presenter().frames_presented(), 1);
        assert_eq!(c.presenter().pixel(260, 300), Some(Palette::Black.color()));
        assert_eq!(c.redraws(), 0);
    }

    #[test]
    fn idle_tick_presents_without_redraw() {
        let mut c = controller();
        assert_eq!(c.tick(None).unwrap(), LoopState::Running);
        assert_eq!(c.tick(Some('x')).unwrap(), LoopState::Running);
        assert_eq!(c.redraws(), 0);
        assert_eq!(c.presenter().frames_presented(), 3);
    }

    #[test]
    fn rejected_move_does_not_redraw() {
        let mut c = controller();
        c.tick(Some('a')).unwrap();
        c.tick(Some('w')).unwrap();
        assert_eq!(c.redraws(), 1);
        assert_eq!((c.state().pupil_h, c.state().pupil_v), (-1, 0));
    }

    #[test]
    fn quit_clears_and_presents_once() {
        let mut c = controller();
        assert_eq!(c.tick(Some('q')).unwrap(), LoopState::Exiting);
        assert_eq!(c.presenter().frames_presented(), 2);
        assert!(c.presenter().front().as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn run_stops_at_quit_and_leaves_later_keys() {
        let mut c = controller();
        let mut keys = ScriptedKeys::new([Some('j'), None, Some('q'), Some('l')]);
        c.run(&mut keys).unwrap();

        assert_eq!(keys.remaining(), 1);
        assert_eq!(c.ticks(), 3);
        assert!(c.state().left_eye_closed);
        assert!(!c.state().right_eye_closed);
        // initial + two running ticks + final clear
        assert_eq!(c.presenter().frames_presented(), 4);
    }
}
