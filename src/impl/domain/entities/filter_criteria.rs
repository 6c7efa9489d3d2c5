use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::record::CategoryId;

/// Inclusive date range. Either bound may be absent. An inverted range
/// (`from > to`) is accepted and matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDateTime>, to: Option<NaiveDateTime>) -> Self {
        Self { from, to }
    }

    /// Range covering whole days, as picked from a calendar: `from` starts at
    /// midnight and `to` runs to the last instant of its day.
    pub fn days(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            from: from.map(|d| d.and_time(NaiveTime::MIN)),
            to: to.map(end_of_day),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}

/// User-selected constraints applied to a record collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: Option<CategoryId>,
    pub date_range: DateRange,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn since(mut self, from: NaiveDateTime) -> Self {
        self.date_range.from = Some(from);
        self
    }

    pub fn until(mut self, to: NaiveDateTime) -> Self {
        self.date_range.to = Some(to);
        self
    }

    /// True when no constraint is set, i.e. every record matches.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.date_range.is_unbounded()
    }
}
