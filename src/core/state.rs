//! Persisted window state
//!
//! Only the window geometry survives restarts. Destination and rule
//! settings deliberately reset to defaults on every launch.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Window state for position/size persistence
///
/// Persisted to `<data dir>/Media Transfer Tool/window_state.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowState {
    /// Window X position
    pub x: f64,
    /// Window Y position
    pub y: f64,
    /// Window width
    pub width: f64,
    /// Window height
    pub height: f64,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            x: 100.0,
            y: 100.0,
            width: 1000.0,
            height: 700.0,
        }
    }
}

impl WindowState {
    const STATE_FILE: &'static str = "window_state.json";

    /// Get the app data directory, creating it if necessary
    fn get_app_data_dir() -> Result<PathBuf, String> {
        let data_dir =
            dirs::data_dir().ok_or_else(|| "Could not determine data directory".to_string())?;

        let app_dir = data_dir.join("Media Transfer Tool");

        if !app_dir.exists() {
            std::fs::create_dir_all(&app_dir)
                .map_err(|e| format!("Failed to create app data directory: {}", e))?;
        }

        Ok(app_dir)
    }

    /// Load window state from disk, or return defaults if not found
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(state) => {
                log::debug!(
                    "Loaded window state from disk: {}x{} at ({}, {})",
                    state.width, state.height, state.x, state.y
                );
                state
            }
            Err(e) => {
                log::debug!("Using default window state: {}", e);
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self, String> {
        let app_dir = Self::get_app_data_dir()?;
        let state_path = app_dir.join(Self::STATE_FILE);

        if !state_path.exists() {
            return Err("State file not found".to_string());
        }

        let contents = std::fs::read_to_string(&state_path)
            .map_err(|e| format!("Failed to read state: {}", e))?;

        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse state: {}", e))
    }

    /// Save window state to disk
    pub fn save(&self) -> Result<(), String> {
        let app_dir = Self::get_app_data_dir()?;
        let state_path = app_dir.join(Self::STATE_FILE);

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize state: {}", e))?;

        std::fs::write(&state_path, json).map_err(|e| format!("Failed to write state: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_state_default() {
        let state = WindowState::default();
        assert_eq!(state.x, 100.0);
        assert_eq!(state.y, 100.0);
        assert_eq!(state.width, 1000.0);
        assert_eq!(state.height, 700.0);
    }

    #[test]
    fn test_window_state_round_trip() {
        let state = WindowState {
            x: 200.0,
            y: 150.0,
            width: 1200.0,
            height: 800.0,
        };
        let json = serde_json::to_string(&state).unwrap();
        let parsed: WindowState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.x, 200.0);
        assert_eq!(parsed.y, 150.0);
        assert_eq!(parsed.width, 1200.0);
        assert_eq!(parsed.height, 800.0);
    }
}
