use crate::entities::{DateRange, FilterCriteria, Record};

impl DateRange {
    /// Records without a timestamp fail every bound that is set.
    pub fn contains<R: Record>(&self, record: &R) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(timestamp) = record.timestamp() else {
            return false;
        };
        self.from.map_or(true, |from| timestamp >= from)
            && self.to.map_or(true, |to| timestamp <= to)
    }
}

impl FilterCriteria {
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.category
            .as_ref()
            .map_or(true, |category| record.category() == category)
            && self.date_range.contains(record)
    }

    /// Stable filter; the input is left untouched.
    pub fn filter<'r, R: Record>(&self, records: &'r [R]) -> Vec<&'r R> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }

    /// Owning variant of [`FilterCriteria::filter`].
    pub fn filter_owned<R: Record>(&self, records: Vec<R>) -> Vec<R> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}
