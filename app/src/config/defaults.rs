//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    ("LOTTERY_MIN", "1", "Lowest drawable number (inclusive)"),
    ("LOTTERY_MAX", "100", "Highest drawable number (inclusive)"),
    (
        "LOTTERY_HISTORY_LIMIT",
        "50",
        "Number of draws kept in history; empty or 0 keeps all",
    ),
    (
        "LOTTERY_GLOBAL_LIMIT",
        "",
        "Cap on drawable values and total draws; empty for unlimited",
    ),
    (
        "LOTTERY_PRIZES",
        "",
        "Initial prizes as Name:capacity pairs separated by commas",
    ),
    ("LOTTERY_SEED", "", "Fixed RNG seed for reproducible sessions"),
    (
        "LOTTERY_TIMEZONE_OFFSET_MINUTES",
        "0",
        "UTC offset used when printing draw timestamps",
    ),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Keys in declaration order, for help output.
pub fn setting_keys() -> impl Iterator<Item = &'static str> {
    DEFS.iter().map(|(key, _, _)| *key)
}
