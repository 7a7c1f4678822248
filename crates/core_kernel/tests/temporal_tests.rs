//! Unit tests for the clock abstraction

use chrono::{NaiveDate, SubsecRound, TimeZone, Timelike, Utc};
use core_kernel::temporal::within;
use core_kernel::{Clock, FixedClock, SystemClock};

#[test]
fn test_fixed_clock_returns_pinned_instant() {
    let at = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
    let clock = FixedClock::new(at);
    assert_eq!(clock.now(), at);
    assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
}

#[test]
fn test_fixed_clock_at_date_is_midnight() {
    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let clock = FixedClock::at_date(date);
    assert_eq!(clock.now(), Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
}

#[test]
fn test_system_clock_tracks_wall_time() {
    let before = Utc::now().trunc_subsecs(6);
    let now = SystemClock.now();
    assert!(now >= before);
}

#[test]
fn test_system_clock_has_microsecond_precision() {
    assert_eq!(SystemClock.now().nanosecond() % 1_000, 0);
}

#[test]
fn test_fixed_clock_truncates_to_microseconds() {
    let at = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
        + chrono::Duration::nanoseconds(123_456_789);
    let clock = FixedClock::new(at);
    assert_eq!(clock.now().nanosecond(), 123_456_000);
    assert!(clock.now() <= at);
}

#[test]
fn test_within_is_inclusive() {
    let min = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    let max = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert!(within(min, min, max));
    assert!(within(max, min, max));
    assert!(!within(min.pred_opt().unwrap(), min, max));
    assert!(!within(max.succ_opt().unwrap(), min, max));
}

#[test]
fn test_clock_is_object_safe() {
    let clock: Box<dyn Clock> = Box::new(FixedClock::at_date(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ));
    assert_eq!(clock.today().to_string(), "2024-01-01");
}
