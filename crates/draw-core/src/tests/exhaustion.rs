use super::{NOW, fixed_caps, session};
use crate::{BlockReason, DrawError, DrawRecord, Lottery};

#[test]
fn draws_walk_through_remaining_candidates() {
    // Samples 0.0, 0.5, 0.99 pick indices 0, 1, 0 over pools of 3, 2, 1.
    let mut caps = fixed_caps(&[0.0, 0.5, 0.99]);
    let s = session(1, 3, Some(10));

    let (s, first) = s.draw_open(&mut caps).unwrap();
    assert_eq!(first, DrawRecord::new(1, NOW));
    assert_eq!(s.candidates(), vec![2, 3]);

    let (s, second) = s.draw_open(&mut caps).unwrap();
    assert_eq!(second.value, 3);
    assert_eq!(s.candidates(), vec![2]);

    let (s, third) = s.draw_open(&mut caps).unwrap();
    assert_eq!(third.value, 2);
    assert!(s.candidates().is_empty());

    let err = s.draw_open(&mut caps).unwrap_err();
    assert_eq!(err, DrawError::Blocked(BlockReason::CandidatesExhausted));

    let values: Vec<i64> = s.history().iter().map(|r| r.value).collect();
    assert_eq!(values, vec![2, 3, 1]);
}

#[test]
fn exhausted_single_value_range_recovers_after_clear() {
    let s = session(1, 1, Some(10));
    let mut lottery = Lottery::new(s, fixed_caps(&[0.0]));

    assert_eq!(lottery.draw_open().unwrap().value, 1);
    assert!(lottery.session().candidates().is_empty());

    let err = lottery.draw_open().unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(lottery.last_message(), Some("no numbers left to draw"));

    lottery.clear();
    assert!(lottery.session().history().is_empty());
    assert_eq!(lottery.session().candidates(), vec![1]);
    assert_eq!(lottery.draw_open().unwrap().value, 1);
}

#[test]
fn no_value_repeats_within_history() {
    let mut s = session(1, 20, None);
    let mut caps = crate::Capabilities::system().with_random(crate::RngSource::seeded(9));
    for _ in 0..20 {
        s = s.draw_open(&mut caps).unwrap().0;
    }
    let mut values: Vec<i64> = s.history().iter().map(|r| r.value).collect();
    values.sort_unstable();
    assert_eq!(values, (1..=20).collect::<Vec<_>>());
    assert!(s.draw_open(&mut caps).is_err());
}
