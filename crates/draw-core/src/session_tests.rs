use super::*;
use crate::capabilities::{FixedClock, SequenceSource, SequentialIds};

const NOW: i64 = 1_700_000_000_000;

fn caps(samples: &[f64]) -> Capabilities {
    Capabilities::fixed(samples.to_vec(), NOW)
}

fn session(min: i64, max: i64) -> Session {
    Session::new(SessionConfig::new(min, max).unwrap())
}

fn with_prize(s: &Session, name: &str, capacity: u32, ids: &mut SequentialIds) -> (Session, String) {
    let (s, prize) = s.add_prize(name, capacity, ids).unwrap();
    (s, prize.id)
}

#[test]
fn new_session_is_empty() {
    let s = session(1, 3);
    assert!(s.history().is_empty());
    assert!(s.prizes().is_empty());
    assert!(s.selected_prize().is_none());
    assert_eq!(s.candidates(), vec![1, 2, 3]);
    assert_eq!(s.check_draw(), Err(BlockReason::NoPrizeSelected));
}

#[test]
fn draw_for_prize_records_name_and_timestamp() {
    let mut ids = SequentialIds::default();
    let (s, gold) = with_prize(&session(1, 3), "Gold", 2, &mut ids);
    let s = s.select_prize(&gold).unwrap();

    let (next, record) = s.draw_for_prize(&mut caps(&[0.0])).unwrap();
    assert_eq!(record, DrawRecord::for_prize(1, NOW, "Gold"));
    assert_eq!(next.history().latest(), Some(&record));
    assert_eq!(next.candidates(), vec![2, 3]);
    // the receiver is a snapshot and stays untouched
    assert!(s.history().is_empty());
}

#[test]
fn draw_without_selection_is_blocked() {
    let err = session(1, 3).draw_for_prize(&mut caps(&[0.0])).unwrap_err();
    assert_eq!(err, DrawError::Blocked(BlockReason::NoPrizeSelected));
    assert!(err.is_recoverable());
}

#[test]
fn open_draw_exhausts_single_value_range() {
    let s = session(1, 1);
    let mut c = caps(&[0.0]).with_random(SequenceSource::constant(0.7));
    let (s, _) = s.draw_open(&mut c).unwrap();
    let err = s.draw_open(&mut c).unwrap_err();
    assert_eq!(err, DrawError::Blocked(BlockReason::CandidatesExhausted));
}

#[test]
fn evicted_value_is_drawn_again() {
    let config = SessionConfig::new(1, 10).unwrap().with_history_limit(Some(2));
    let mut s = Session::new(config);
    let mut c = caps(&[0.0]);
    let mut drawn = Vec::new();
    for _ in 0..4 {
        let (next, record) = s.draw_open(&mut c).unwrap();
        drawn.push(record.value);
        s = next;
    }
    // 1 left the history on the third draw, so the fourth draw picks it again
    assert_eq!(drawn, vec![1, 2, 3, 1]);
    let values: Vec<i64> = s.history().iter().map(|r| r.value).collect();
    assert_eq!(values, vec![1, 3]);
    assert_eq!(s.candidates()[..2], [2, 4]);
}

#[test]
fn remove_selected_prize_clears_selection() {
    let mut ids = SequentialIds::default();
    let (s, gold) = with_prize(&session(1, 3), "Gold", 1, &mut ids);
    let (s, silver) = with_prize(&s, "Silver", 1, &mut ids);

    let s = s.select_prize(&gold).unwrap();
    let kept = s.remove_prize(&silver).unwrap();
    assert_eq!(kept.selected_prize().map(|p| p.id.as_str()), Some(gold.as_str()));

    let cleared = s.remove_prize(&gold).unwrap();
    assert!(cleared.selected_prize().is_none());
    assert_eq!(cleared.prizes().len(), 1);
}

#[test]
fn removing_prize_keeps_its_history() {
    let mut ids = SequentialIds::default();
    let (s, gold) = with_prize(&session(1, 3), "Gold", 1, &mut ids);
    let s = s.select_prize(&gold).unwrap();
    let (s, _) = s.draw_for_prize(&mut caps(&[0.0])).unwrap();

    let s = s.remove_prize(&gold).unwrap();
    assert_eq!(s.history().len(), 1);
    assert_eq!(s.candidates(), vec![2, 3]);
}

#[test]
fn rename_detaches_consumption() {
    let mut ids = SequentialIds::default();
    let (s, gold) = with_prize(&session(1, 5), "Gold", 1, &mut ids);
    let s = s.select_prize(&gold).unwrap();
    let (s, _) = s.draw_for_prize(&mut caps(&[0.0])).unwrap();
    assert_eq!(s.check_draw(), Err(BlockReason::PrizeCapacityReached));

    let s = s.rename_prize(&gold, "Platinum").unwrap();
    let prize = s.selected_prize().unwrap();
    assert_eq!(s.prize_standing(prize).consumed, 0);
    assert!(s.can_draw());

    // renaming back re-attaches the old record
    let s = s.rename_prize(&gold, "Gold").unwrap();
    assert_eq!(s.check_draw(), Err(BlockReason::PrizeCapacityReached));
}

#[test]
fn raising_capacity_reopens_prize() {
    let mut ids = SequentialIds::default();
    let (s, gold) = with_prize(&session(1, 5), "Gold", 1, &mut ids);
    let s = s.select_prize(&gold).unwrap();
    let (s, _) = s.draw_for_prize(&mut caps(&[0.0])).unwrap();
    assert!(!s.can_draw());

    let s = s.set_prize_capacity(&gold, 2).unwrap();
    assert!(s.can_draw());
}

#[test]
fn select_unknown_prize_fails() {
    assert_eq!(
        session(1, 3).select_prize("ghost"),
        Err(DrawError::PrizeNotFound("ghost".into()))
    );
}

#[test]
fn select_by_name_resolves_id() {
    let mut ids = SequentialIds::new("p");
    let (s, gold) = with_prize(&session(1, 3), "Gold", 1, &mut ids);
    let s = s.select_prize("Gold").unwrap();
    assert_eq!(s.selected_prize().unwrap().id, gold);
    assert!(s.deselect_prize().selected_prize().is_none());
}

#[test]
fn global_limit_counts_open_and_prize_draws() {
    let mut ids = SequentialIds::default();
    let (s, gold) = with_prize(&session(1, 10), "Gold", 5, &mut ids);
    let s = s
        .select_prize(&gold)
        .unwrap()
        .apply_global_limit(Some(GlobalLimit::new(2)));
    let mut c = caps(&[0.0]);

    let (s, _) = s.draw_open(&mut c).unwrap();
    let (s, _) = s.draw_for_prize(&mut c).unwrap();
    assert_eq!(s.global_standing().remaining, Some(0));
    assert_eq!(
        s.draw_for_prize(&mut c).unwrap_err(),
        DrawError::Blocked(BlockReason::GlobalLimitReached)
    );
    assert_eq!(
        s.draw_open(&mut c).unwrap_err(),
        DrawError::Blocked(BlockReason::GlobalLimitReached)
    );

    let lifted = s.apply_global_limit(None);
    assert!(lifted.can_draw());
}

#[test]
fn clear_history_resets_derived_counts() {
    let mut ids = SequentialIds::default();
    let (s, gold) = with_prize(&session(1, 2), "Gold", 1, &mut ids);
    let s = s
        .select_prize(&gold)
        .unwrap()
        .apply_global_limit(Some(GlobalLimit::new(1)));
    let (s, _) = s.draw_for_prize(&mut caps(&[0.0])).unwrap();
    assert!(!s.can_draw());

    let cleared = s.clear_history();
    assert!(cleared.history().is_empty());
    assert_eq!(cleared.prize_standing(cleared.selected_prize().unwrap()).consumed, 0);
    assert_eq!(cleared.global_standing().drawn, 0);
    assert!(cleared.can_draw());
    assert_eq!(cleared.clear_history(), cleared);
}

#[test]
fn session_serializes_to_json() {
    let mut ids = SequentialIds::default();
    let (s, gold) = with_prize(&session(1, 3), "Gold", 1, &mut ids);
    let s = s.select_prize(&gold).unwrap();
    let mut c = caps(&[0.0]).with_clock(FixedClock(5));
    let (s, _) = s.draw_for_prize(&mut c).unwrap();

    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["config"]["range"]["min"], 1);
    assert_eq!(json["selectedPrizeId"], "prize-1");
    assert_eq!(json["history"][0]["prizeName"], "Gold");
    assert_eq!(json["history"][0]["timestamp"], 5);

    let back: Session = serde_json::from_value(json).unwrap();
    assert_eq!(back, s);
}
