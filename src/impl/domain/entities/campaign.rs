use chrono::NaiveDate;

use super::record::CategoryId;

#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub banner_url: Option<String>,
}

impl Campaign {
    /// Whether the campaign runs on the given day. Open-ended bounds are
    /// treated as unbounded.
    pub fn is_running_on(&self, date: NaiveDate) -> bool {
        self.start_date.map_or(true, |start| start <= date)
            && self.end_date.map_or(true, |end| date <= end)
    }
}
