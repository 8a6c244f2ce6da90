use crate::{Capabilities, Session, SessionConfig};

const NOW: i64 = 1_700_000_000_000;

fn session(min: i64, max: i64, history_limit: Option<i64>) -> Session {
    Session::new(
        SessionConfig::new(min, max)
            .expect("valid range")
            .with_history_limit(history_limit),
    )
}

fn fixed_caps(samples: &[f64]) -> Capabilities {
    Capabilities::fixed(samples.to_vec(), NOW)
}

mod exhaustion;
