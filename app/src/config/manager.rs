//! SettingsManager: explicit overrides, then environment, then defaults.

use std::collections::HashMap;

use super::defaults::DEFAULT_SETTINGS;
use super::validation::validate_setting;

/// Resolves setting values in priority order.
#[derive(Debug, Clone, Default)]
pub struct SettingsManager {
    overrides: HashMap<String, String>,
    read_env: bool,
}

impl SettingsManager {
    /// Manager backed by the process environment.
    pub fn from_env() -> Self {
        Self {
            overrides: HashMap::new(),
            read_env: true,
        }
    }

    /// Manager that ignores the environment (for tests and embedding).
    pub fn isolated() -> Self {
        Self::default()
    }

    /// Get a setting value. Falls back to default if not set anywhere.
    pub fn get_setting(&self, key: &str) -> Result<String, anyhow::Error> {
        if let Some(val) = self.overrides.get(key) {
            return Ok(val.clone());
        }
        if self.read_env {
            if let Ok(val) = std::env::var(key) {
                return Ok(val);
            }
        }
        if let Some(def) = DEFAULT_SETTINGS.get(key) {
            return Ok(def.default.to_string());
        }
        anyhow::bail!("setting not found: {key}");
    }

    /// Set a setting value with validation.
    pub fn set_setting(&mut self, key: &str, value: &str) -> Result<(), anyhow::Error> {
        if !DEFAULT_SETTINGS.contains_key(key) {
            anyhow::bail!("unknown setting key: {key}");
        }
        validate_setting(key, value)
            .map_err(|e| anyhow::anyhow!("validation error for {key}: {e}"))?;
        self.overrides.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Validate every resolved setting, collecting all failures.
    pub fn validate_all(&self) -> Result<(), anyhow::Error> {
        let mut keys: Vec<&str> = DEFAULT_SETTINGS.keys().copied().collect();
        keys.sort_unstable();

        let errors: Vec<String> = keys
            .into_iter()
            .filter_map(|key| {
                let value = self.get_setting(key).ok()?;
                validate_setting(key, &value)
                    .err()
                    .map(|e| format!("{key}={value:?}: {e}"))
            })
            .collect();

        if !errors.is_empty() {
            anyhow::bail!("invalid settings: {}", errors.join("; "));
        }
        Ok(())
    }
}
