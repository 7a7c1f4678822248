//! Vacation entitlement policies

use chrono::{Datelike, NaiveDate};
use std::fmt::Debug;

/// Computes vacation days from the contract start and evaluation date
pub trait VacationPolicy: Send + Sync + Debug {
    fn vacation_days(&self, start_date: NaiveDate, as_of: NaiveDate) -> i32;
}

/// Same entitlement for everyone regardless of tenure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatVacationPolicy {
    pub days: i32,
}

impl Default for FlatVacationPolicy {
    fn default() -> Self {
        Self { days: 30 }
    }
}

impl VacationPolicy for FlatVacationPolicy {
    fn vacation_days(&self, _start_date: NaiveDate, _as_of: NaiveDate) -> i32 {
        self.days
    }
}

/// Accrues `days_per_year / 12` per completed month of service, capped at
/// `days_per_year`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenureVacationPolicy {
    pub days_per_year: i32,
}

impl Default for TenureVacationPolicy {
    fn default() -> Self {
        Self { days_per_year: 30 }
    }
}

impl VacationPolicy for TenureVacationPolicy {
    fn vacation_days(&self, start_date: NaiveDate, as_of: NaiveDate) -> i32 {
        let months = completed_months(start_date, as_of);
        (months * self.days_per_year / 12).min(self.days_per_year)
    }
}

/// Whole months between two dates; zero when `as_of` precedes `start`
pub fn completed_months(start: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut months = (as_of.year() - start.year()) * 12 + as_of.month() as i32
        - start.month() as i32;
    if as_of.day() < start.day() {
        months -= 1;
    }
    months.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_completed_months() {
        assert_eq!(completed_months(date(2024, 1, 15), date(2024, 2, 14)), 0);
        assert_eq!(completed_months(date(2024, 1, 15), date(2024, 2, 15)), 1);
        assert_eq!(completed_months(date(2023, 6, 1), date(2024, 6, 1)), 12);
        assert_eq!(completed_months(date(2024, 6, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_flat_policy_ignores_tenure() {
        let policy = FlatVacationPolicy::default();
        assert_eq!(policy.vacation_days(date(2024, 5, 1), date(2024, 6, 1)), 30);
    }

    #[test]
    fn test_tenure_policy_accrues_and_caps() {
        let policy = TenureVacationPolicy::default();
        assert_eq!(policy.vacation_days(date(2024, 1, 1), date(2024, 1, 20)), 0);
        assert_eq!(policy.vacation_days(date(2024, 1, 1), date(2024, 7, 1)), 15);
        assert_eq!(policy.vacation_days(date(2020, 1, 1), date(2024, 7, 1)), 30);
    }
}
