use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

/// Number of months shown in the turnover chart.
pub const TREND_MONTHS: u32 = 12;

/// One calendar month, identified by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthBucket {
    start: NaiveDate,
}

impl MonthBucket {
    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        let start = date - Days::new(u64::from(date.day0()));
        MonthBucket { start }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day of the following month.
    pub fn end_exclusive(&self) -> Option<NaiveDate> {
        self.start.checked_add_months(Months::new(1))
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// "Oct 2026".
    pub fn label(&self) -> String {
        self.start.format("%b %Y").to_string()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

/// The `count` calendar months ending with the month of `today`, oldest first.
pub fn trailing_months(today: NaiveDate, count: u32) -> Vec<MonthBucket> {
    let current = MonthBucket::of(today);
    (0..count)
        .rev()
        .filter_map(|back| current.start.checked_sub_months(Months::new(back)))
        .map(MonthBucket::of)
        .collect()
}

/// Half-open date range `[first month start, month after last)` covering the buckets.
pub fn date_window(buckets: &[MonthBucket]) -> Option<(NaiveDate, NaiveDate)> {
    let first = buckets.first()?;
    let last = buckets.last()?;
    Some((first.start(), last.end_exclusive()?))
}

/// Row from a grouped-by-month count query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct MonthlyCount {
    pub month_start: NaiveDate,
    pub count: i64,
}

/// Lay grouped counts onto the buckets; months with no row get 0.
pub fn fill_buckets(buckets: &[MonthBucket], counts: &[MonthlyCount]) -> Vec<i64> {
    buckets
        .iter()
        .map(|bucket| {
            counts
                .iter()
                .filter(|c| bucket.contains(c.month_start))
                .map(|c| c.count)
                .sum()
        })
        .collect()
}

/// Hires and resignations per month, chronological.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TurnoverTrend {
    pub months: Vec<String>,
    pub hires: Vec<i64>,
    pub resignations: Vec<i64>,
}

impl TurnoverTrend {
    pub fn from_counts(
        buckets: &[MonthBucket],
        hires: &[MonthlyCount],
        resignations: &[MonthlyCount],
    ) -> Self {
        TurnoverTrend {
            months: buckets.iter().map(MonthBucket::label).collect(),
            hires: fill_buckets(buckets, hires),
            resignations: fill_buckets(buckets, resignations),
        }
    }

    /// All-zero trend for the months ending at `today`.
    pub fn empty(today: NaiveDate) -> Self {
        Self::from_counts(&trailing_months(today, TREND_MONTHS), &[], &[])
    }
}
