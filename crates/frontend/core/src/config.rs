//! Frontend configuration structures and loaders.
//!
//! UI-specific settings shared across frontend implementations. Values come
//! from the process environment so embedders can tune behavior without a
//! config file.

use std::env;

/// Cross-frontend configuration.
#[derive(Clone, Debug)]
pub struct FrontendConfig {
    /// Wrap slot navigation around collection bounds instead of clamping.
    pub loop_inventory: bool,
    /// Generic interaction prompt prefix ("Interact with").
    pub interact_hint: String,
    pub messages: MessageConfig,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            loop_inventory: false,
            interact_hint: "Interact with".to_string(),
            messages: MessageConfig::default(),
        }
    }
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SATCHEL_LOOP_INVENTORY` - Wrap slot navigation (default: false)
    /// - `SATCHEL_INTERACT_HINT` - Generic prompt prefix (default: "Interact with")
    /// - `SATCHEL_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(looping) = read_env_bool("SATCHEL_LOOP_INVENTORY") {
            config.loop_inventory = looping;
        }
        if let Ok(hint) = env::var("SATCHEL_INTERACT_HINT")
            && !hint.trim().is_empty()
        {
            config.interact_hint = hint;
        }
        if let Some(capacity) = read_env::<usize>("SATCHEL_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
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
