//! Setting value validation.

use draw_core::GlobalLimit;

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "LOTTERY_MIN" | "LOTTERY_MAX" => {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| "must be an integer")?;
        }
        "LOTTERY_HISTORY_LIMIT" => {
            if !value.trim().is_empty() {
                value
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| "must be an integer or empty")?;
            }
        }
        "LOTTERY_GLOBAL_LIMIT" => {
            GlobalLimit::parse_applied(value).map_err(|_| "must be a number or empty")?;
        }
        "LOTTERY_SEED" => {
            if !value.trim().is_empty() {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| "must be a non-negative integer or empty")?;
            }
        }
        "LOTTERY_TIMEZONE_OFFSET_MINUTES" => validate_int_range(value, -720, 840)?,
        "LOTTERY_PRIZES" => {
            parse_prize_specs(value)?;
        }
        _ => {}
    }
    Ok(())
}

/// Parse `Gold:1, Silver:2, Bronze` into name/capacity pairs. A missing
/// capacity means 1.
pub fn parse_prize_specs(value: &str) -> Result<Vec<(String, u32)>, String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (name, capacity) = match entry.rsplit_once(':') {
                Some((name, capacity)) => {
                    let capacity = capacity
                        .trim()
                        .parse::<u32>()
                        .map_err(|_| format!("invalid capacity in '{entry}'"))?;
                    (name.trim(), capacity)
                }
                None => (entry, 1),
            };
            if name.is_empty() {
                return Err(format!("missing prize name in '{entry}'"));
            }
            Ok((name.to_string(), capacity))
        })
        .collect()
}

fn validate_int_range(value: &str, min: i32, max: i32) -> Result<(), String> {
    let v: i32 = value.trim().parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
