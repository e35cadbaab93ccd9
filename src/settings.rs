//! Presentation settings
//!
//! Window and console preferences; game balance lives in `tuning`.

use serde::{Deserialize, Serialize};

/// Presentation settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Wait for the display refresh before presenting. Off means frames run
    /// as fast as the platform allows.
    pub vsync: bool,
    /// Block on an Enter key press in the terminal after the game ends
    pub wait_for_enter: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Breakout".to_owned(),
            vsync: false,
            wait_for_enter: true,
        }
    }
}

impl Settings {
    /// Settings for this run. Nothing is read from disk.
    pub fn load() -> Self {
        let settings = Self::default();
        log::debug!("Using default settings: {:?}", settings);
        settings
    }

    /// Present mode matching the vsync preference
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::load();
        assert_eq!(settings.title, "Breakout");
        assert!(settings.wait_for_enter);
        assert_eq!(settings.present_mode(), wgpu::PresentMode::AutoNoVsync);
    }

    #[test]
    fn test_vsync_present_mode() {
        let settings = Settings {
            vsync: true,
            ..Default::default()
        };
        assert_eq!(settings.present_mode(), wgpu::PresentMode::AutoVsync);
    }
}
