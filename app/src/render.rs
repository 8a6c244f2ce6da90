//! Plain-text views of a session.

use chrono::{DateTime, FixedOffset};
use draw_core::{DrawRecord, Session};

pub fn format_timestamp(millis: i64, offset_minutes: i32) -> String {
    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    let Some(utc) = DateTime::from_timestamp_millis(millis) else {
        return millis.to_string();
    };
    match FixedOffset::east_opt(offset_minutes.saturating_mul(60)) {
        Some(offset) => utc.with_timezone(&offset).format(FORMAT).to_string(),
        None => utc.format(FORMAT).to_string(),
    }
}

pub fn record_line(record: &DrawRecord, offset_minutes: i32) -> String {
    let prize = record
        .prize_name
        .as_deref()
        .map(|name| format!(" (prize: {name})"))
        .unwrap_or_default();
    format!(
        "#{}{}  {}",
        record.value,
        prize,
        format_timestamp(record.timestamp, offset_minutes)
    )
}

pub fn history(session: &Session, offset_minutes: i32) -> String {
    if session.history().is_empty() {
        return "no history".to_string();
    }
    session
        .history()
        .iter()
        .map(|r| record_line(r, offset_minutes))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn prizes(session: &Session) -> String {
    if session.prizes().is_empty() {
        return "no prizes yet; add one with 'add <name> [capacity]'".to_string();
    }
    let selected = session.selected_prize().map(|p| p.id.as_str());
    session
        .prizes()
        .iter()
        .map(|p| {
            let standing = session.prize_standing(p);
            let marker = if selected == Some(p.id.as_str()) { "*" } else { " " };
            format!(
                "[{marker}] {} ({})  capacity {} / drawn {} / left {}",
                p.name, p.id, standing.capacity, standing.consumed, standing.remaining
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn status(session: &Session) -> String {
    let range = session.range();
    let global = session.global_standing();
    let limit = global
        .limit
        .map_or_else(|| "unlimited".to_string(), |l| l.to_string());
    let remaining = global
        .remaining
        .map_or_else(|| "unlimited".to_string(), |r| r.to_string());
    let selected = session
        .selected_prize()
        .map_or("none", |p| p.name.as_str());
    let draw_state = match session.check_draw() {
        Ok(()) => "ready".to_string(),
        Err(reason) => format!("blocked ({reason})"),
    };
    format!(
        "range {}..={} | global limit {} | drawn {} | remaining {} | candidates {} | prize {} | {}",
        range.min(),
        range.max(),
        limit,
        global.drawn,
        remaining,
        session.candidates().len(),
        selected,
        draw_state
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use draw_core::{Capabilities, GlobalLimit, SessionConfig};

    fn session() -> Session {
        Session::new(SessionConfig::new(1, 3).unwrap())
    }

    #[test]
    fn timestamps_honor_offset() {
        assert_eq!(format_timestamp(0, 0), "1970-01-01 00:00:00");
        assert_eq!(format_timestamp(0, 540), "1970-01-01 09:00:00");
        assert_eq!(format_timestamp(i64::MAX, 0), i64::MAX.to_string());
    }

    #[test]
    fn record_line_shows_prize() {
        let rec = DrawRecord::for_prize(7, 0, "Gold");
        assert_eq!(record_line(&rec, 0), "#7 (prize: Gold)  1970-01-01 00:00:00");
        let rec = DrawRecord::new(7, 0);
        assert_eq!(record_line(&rec, 0), "#7  1970-01-01 00:00:00");
    }

    #[test]
    fn empty_views() {
        assert_eq!(history(&session(), 0), "no history");
        assert!(prizes(&session()).starts_with("no prizes"));
    }

    #[test]
    fn prize_view_marks_selection() {
        let mut caps = Capabilities::fixed(vec![0.0], 0);
        let (s, gold) = session().add_prize("Gold", 2, caps.ids.as_mut()).unwrap();
        let s = s.select_prize(&gold.id).unwrap();
        let (s, _) = s.draw_for_prize(&mut caps).unwrap();
        assert_eq!(
            prizes(&s),
            "[*] Gold (prize-1)  capacity 2 / drawn 1 / left 1"
        );
    }

    #[test]
    fn status_reports_block_reason() {
        let s = session().apply_global_limit(Some(GlobalLimit::new(0)));
        assert_eq!(
            status(&s),
            "range 1..=3 | global limit 0 | drawn 0 | remaining 0 | candidates 0 | prize none | blocked (no prize selected)"
        );
    }
}
