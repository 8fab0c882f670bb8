//! End-to-end wizard flow over a static skip source
//!
//! Walks the full booking flow the way the UI drives it: select waste types,
//! fill in heavy-waste detail, advance through the steps, then filter and
//! compare skips.

use chrono::NaiveDateTime;
use skiphire_app::BookingSession;
use skiphire_source::{FailingSkipSource, StaticSkipSource};
use skiphire_types::{HeavyWasteBand, PlasterboardBand, SkipRecord, Step};

fn skip(
    id: u32,
    size: u32,
    price: f64,
    allowed_on_road: bool,
    allows_heavy_waste: bool,
) -> SkipRecord {
    SkipRecord {
        id,
        size,
        hire_period_days: 14,
        transport_cost: None,
        per_tonne_cost: None,
        price_before_vat: price,
        vat: 20.0,
        postcode: "NR32".to_string(),
        area: "Lowestoft".to_string(),
        forbidden: false,
        created_at: NaiveDateTime::default(),
        updated_at: NaiveDateTime::default(),
        allowed_on_road,
        allows_heavy_waste,
    }
}

fn lowestoft_skips() -> Vec<SkipRecord> {
    vec![
        skip(1, 4, 278.0, true, false),
        skip(2, 6, 305.0, true, true),
        skip(3, 8, 375.0, false, true),
        skip(4, 10, 400.0, false, true),
        skip(5, 12, 439.0, false, false),
    ]
}

#[test]
fn full_booking_flow() {
    let mut session = BookingSession::new(Box::new(StaticSkipSource::new(lowestoft_skips())));
    session.load_skips("NR32", "Lowestoft").unwrap();

    // Step 1: waste types. garden-waste is preselected; add household.
    assert_eq!(session.state().step(), Step::WasteType);
    assert!(session.state_mut().toggle_waste_type("household-waste"));
    assert!(session.state_mut().advance_step());

    // Step 2: heavy-waste detail.
    assert_eq!(session.state().step(), Step::HeavyWasteDetail);
    session.state_mut().toggle_heavy_waste_type("soil");
    session.state_mut().toggle_heavy_waste_type("rubble");
    session
        .state_mut()
        .set_heavy_waste_band(HeavyWasteBand::FiveToTwenty);
    session
        .state_mut()
        .set_plasterboard_band(PlasterboardBand::ZeroToTwenty);
    assert!(session.state_mut().advance_step());

    // Step 3: skip selection. Heavy waste restricts the listing.
    assert_eq!(session.state().step(), Step::SkipSelection);
    let ids: Vec<u32> = session.visible_skips().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![2, 3, 4]);

    // Compare three, then a fourth evicts the oldest.
    session.toggle_compare(2);
    session.toggle_compare(3);
    session.toggle_compare(4);
    session.toggle_compare(2);
    session.toggle_compare(2);
    let compared: Vec<u32> = session.compared_skips().iter().map(|s| s.id).collect();
    assert_eq!(compared, vec![3, 4, 2]);
}

#[test]
fn price_bounds_follow_loaded_records() {
    let mut session = BookingSession::new(Box::new(StaticSkipSource::new(lowestoft_skips())));
    session.load_skips("NR32", "Lowestoft").unwrap();
    assert_eq!(session.filter().price_range.min(), 278.0);
    assert_eq!(session.filter().price_range.max(), 439.0);
}

#[test]
fn road_placement_filter() {
    let mut session = BookingSession::new(Box::new(StaticSkipSource::new(lowestoft_skips())));
    session.load_skips("NR32", "Lowestoft").unwrap();
    session.filter_mut().road_placement_only = true;
    let ids: Vec<u32> = session.visible_skips().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn guarded_advance_rejected_without_selection() {
    let mut session = BookingSession::new(Box::new(StaticSkipSource::new(Vec::new())));
    session.state_mut().remove_waste_type("garden-waste");
    assert!(!session.state_mut().advance_step());
    assert_eq!(session.state().step(), Step::WasteType);
}

#[test]
fn fetch_failure_leaves_wizard_usable() {
    let mut session = BookingSession::new(Box::new(FailingSkipSource));
    assert!(session.load_skips("NR32", "Lowestoft").is_err());

    // Wizard still progresses; the skip list is just empty.
    assert!(session.state_mut().advance_step());
    assert!(session.state_mut().advance_step());
    assert_eq!(session.state().step(), Step::SkipSelection);
    assert!(session.visible_skips().is_empty());
}
