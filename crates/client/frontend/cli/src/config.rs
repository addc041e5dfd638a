//! CLI-specific configuration for terminal UI.
use std::env;
use std::path::PathBuf;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend panel configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_FRAME_INTERVAL_MS` - Frame interval in milliseconds (default: 16)
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 6)
    /// - `LOBBY_LOG_DIR` - Directory for the log file (default: platform data dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(interval) = read_env::<u64>("CLI_FRAME_INTERVAL_MS") {
            config.ui.frame_interval_ms = interval.max(1);
        }

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        config.log_dir = env::var_os("LOBBY_LOG_DIR").map(PathBuf::from);

        config
    }
}

/// UI layout and timing configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Delay between frames; the store revision is polled once per frame.
    pub frame_interval_ms: u64,
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            message_panel_height: 6,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_one_frame_per_display_refresh() {
        let config = CliConfig::default();
        assert_eq!(config.ui.frame_interval_ms, 16);
        assert_eq!(config.ui.message_panel_height, 6);
        assert!(config.log_dir.is_none());
    }
}
