//! CLI-specific configuration for the terminal UI.
use std::env;

/// Terminal UI configuration, separate from cross-frontend settings.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SATCHEL_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    /// - `SATCHEL_PREVIEW_PANE` - Show the preview pane (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("SATCHEL_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }
        if let Some(show) = read_env_bool("SATCHEL_PREVIEW_PANE") {
            config.ui.preview_pane = show;
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of the message panel in lines (including borders).
    pub message_panel_height: u16,
    /// Whether the ASCII preview pane is rendered at all.
    pub preview_pane: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
            preview_pane: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
