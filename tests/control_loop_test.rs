//! End-to-end tests for the control loop against an in-memory display.

use anyhow::{bail, Result};

use cotton::core::{MemoryDisplay, Present, Surface};
use cotton::engine::{Controller, LoopConfig, LoopState};
use cotton::input::ScriptedKeys;
use cotton::types::{FrameGeometry, Palette};

fn controller() -> Controller<MemoryDisplay> {
    // Stride wider than the visible row, like many real framebuffers.
    let display = MemoryDisplay::new(FrameGeometry::new(640, 480, 1344, 480));
    Controller::new(display, LoopConfig::unpaced()).unwrap()
}

#[test]
fn toggling_left_eye_redraws_once_then_keeps_presenting() {
    let mut c = controller();
    assert!(!c.state().left_eye_closed);
    assert_eq!((c.state().pupil_h, c.state().pupil_v), (0, 0));

    assert_eq!(c.tick(Some('j')).unwrap(), LoopState::Running);
    assert!(c.state().left_eye_closed);
    assert_eq!(c.redraws(), 1);
    assert_eq!(c.presenter().frames_presented(), 2);
    assert_eq!(c.presenter().pixel(260, 300), Some(Palette::White.color()));
    assert_eq!(c.presenter().pixel(380, 300), Some(Palette::Black.color()));

    assert_eq!(c.tick(None).unwrap(), LoopState::Running);
    assert_eq!(c.redraws(), 1);
    assert_eq!(c.presenter().frames_presented(), 3);
}

#[test]
fn pupils_never_move_diagonally() {
    let mut c = controller();
    c.tick(Some('a')).unwrap();
    assert_eq!((c.state().pupil_h, c.state().pupil_v), (-1, 0));

    c.tick(Some('w')).unwrap();
    assert_eq!((c.state().pupil_h, c.state().pupil_v), (-1, 0));
    assert_eq!(c.redraws(), 1);

    assert_eq!(c.presenter().pixel(245, 300), Some(Palette::Black.color()));
    assert_eq!(c.presenter().pixel(365, 300), Some(Palette::Black.color()));
}

#[test]
fn quit_clears_presents_and_ignores_remaining_keys() {
    let mut c = controller();
    let mut keys = ScriptedKeys::new([Some('l'), Some('d'), None, Some('q'), Some('j'), Some('a')]);
    c.run(&mut keys).unwrap();

    assert_eq!(c.ticks(), 4);
    assert_eq!(keys.remaining(), 2);
    assert!(c.state().right_eye_closed);
    assert!(!c.state().left_eye_closed);
    assert_eq!(c.state().pupil_h, 1);

    // Initial frame, three running ticks, and the final blank frame.
    assert_eq!(c.presenter().frames_presented(), 5);
    assert!(c.frame().as_bytes().iter().all(|&b| b == 0));
    assert!(c.presenter().front().as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn ctrl_c_byte_quits() {
    let mut c = controller();
    assert_eq!(c.tick(Some('\u{3}')).unwrap(), LoopState::Exiting);
}

#[test]
fn unknown_keys_change_nothing() {
    let mut c = controller();
    let before = c.frame().clone();
    for key in ['x', 'J', 'W', ' ', '\n'] {
        assert_eq!(c.tick(Some(key)).unwrap(), LoopState::Running);
    }
    assert_eq!(c.redraws(), 0);
    assert_eq!(c.frame(), &before);
}

/// Presenter whose device disappears after a number of frames.
struct FlakyDisplay {
    inner: MemoryDisplay,
    frames_left: u32,
}

impl Present for FlakyDisplay {
    fn geometry(&self) -> FrameGeometry {
        self.inner.geometry()
    }

    fn present(&mut self, frame: &Surface) -> Result<()> {
        if self.frames_left == 0 {
            bail!("device gone");
        }
        self.frames_left -= 1;
        self.inner.present(frame)
    }
}

#[test]
fn presentation_errors_stop_the_loop() {
    let display = FlakyDisplay {
        inner: MemoryDisplay::new(FrameGeometry::packed(64, 64)),
        frames_left: 2,
    };
    let mut c = Controller::new(display, LoopConfig::unpaced()).unwrap();
    let mut keys = ScriptedKeys::new([None; 8]);

    let err = c.run(&mut keys).unwrap_err();
    assert_eq!(err.to_string(), "device gone");
    assert_eq!(c.ticks(), 2);
}

#[test]
fn initial_present_failure_is_reported() {
    let display = FlakyDisplay {
        inner: MemoryDisplay::new(FrameGeometry::packed(64, 64)),
        frames_left: 0,
    };
    let err = Controller::new(display, LoopConfig::unpaced()).err().unwrap();
    assert!(err.to_string().contains("initial frame"));
}
