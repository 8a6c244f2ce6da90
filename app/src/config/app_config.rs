//! Runtime configuration resolved from settings and environment.

use anyhow::Context;
use draw_core::{DrawRange, GlobalLimit, SessionConfig};

use super::manager::SettingsManager;
use super::validation::parse_prize_specs;

/// Largest range the console accepts. Candidate lists are built in full on
/// every status line and draw.
pub const MAX_RANGE_SIZE: u128 = 10_000_000;

/// Runtime configuration for one console session.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub range: DrawRange,
    pub history_limit: Option<i64>,
    pub global_limit: Option<GlobalLimit>,
    pub prizes: Vec<(String, u32)>,
    pub seed: Option<u64>,
    pub timezone_offset_minutes: i32,
}

impl AppConfig {
    /// Load configuration from the settings manager. Invalid values are
    /// reported, never replaced with defaults.
    pub fn load(sm: &SettingsManager) -> Result<Self, anyhow::Error> {
        sm.validate_all()?;
        let g = |key: &str| -> String { sm.get_setting(key).unwrap_or_default() };

        let range = DrawRange::parse(&g("LOTTERY_MIN"), &g("LOTTERY_MAX"))
            .context("LOTTERY_MIN/LOTTERY_MAX")?;
        if range.size() > MAX_RANGE_SIZE {
            anyhow::bail!(
                "LOTTERY_MIN/LOTTERY_MAX: range holds {} numbers, at most {MAX_RANGE_SIZE} allowed",
                range.size()
            );
        }
        let global_limit =
            GlobalLimit::parse_applied(&g("LOTTERY_GLOBAL_LIMIT")).context("LOTTERY_GLOBAL_LIMIT")?;
        let prizes = parse_prize_specs(&g("LOTTERY_PRIZES"))
            .map_err(|e| anyhow::anyhow!("LOTTERY_PRIZES: {e}"))?;

        Ok(Self {
            range,
            history_limit: parse_optional(&g("LOTTERY_HISTORY_LIMIT"))?,
            global_limit,
            prizes,
            seed: parse_optional(&g("LOTTERY_SEED"))?,
            timezone_offset_minutes: g("LOTTERY_TIMEZONE_OFFSET_MINUTES")
                .trim()
                .parse()
                .unwrap_or(0),
        })
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            range: self.range,
            history_limit: self.history_limit,
        }
    }
}

fn parse_optional<T: std::str::FromStr>(s: &str) -> Result<Option<T>, anyhow::Error>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    Ok(Some(s.parse()?))
}
