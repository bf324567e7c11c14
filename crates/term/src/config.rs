//! Display session configuration.
//!
//! Configure the session using environment variables:
//!
//! - `COTTON_FB_DEVICE`: framebuffer device path (default: "/dev/fb0")
//! - `COTTON_RAW_TTY`: set to "0" or "false" to leave the terminal mode alone

use std::path::PathBuf;

pub const DEFAULT_FB_DEVICE: &str = "/dev/fb0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub device: PathBuf,
    pub raw_tty: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_FB_DEVICE),
            raw_tty: true,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let device = lookup("COTTON_FB_DEVICE")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .unwrap_or_else(|| DEFAULT_FB_DEVICE.to_string());

        let raw_tty = lookup("COTTON_RAW_TTY")
            .map(|v| !(v == "0" || v.to_lowercase() == "false"))
            .unwrap_or(true);

        Self {
            device: PathBuf::from(device),
            raw_tty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = SessionConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, SessionConfig::default());
        assert_eq!(cfg.device, PathBuf::from("/dev/fb0"));
        assert!(cfg.raw_tty);
    }

    #[test]
    fn reads_device_and_raw_flag() {
        let cfg = SessionConfig::from_lookup(lookup(&[
            ("COTTON_FB_DEVICE", " /dev/fb1 "),
            ("COTTON_RAW_TTY", "FALSE"),
        ]));
        assert_eq!(cfg.device, PathBuf::from("/dev/fb1"));
        assert!(!cfg.raw_tty);
    }

    #[test]
    fn blank_device_falls_back_to_default() {
        let cfg = SessionConfig::from_lookup(lookup(&[("COTTON_FB_DEVICE", "  "), ("COTTON_RAW_TTY", "1")]));
        assert_eq!(cfg.device, PathBuf::from(DEFAULT_FB_DEVICE));
        assert!(cfg.raw_tty);
    }
}
