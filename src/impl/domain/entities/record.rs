use std::fmt;

use chrono::NaiveDateTime;

/// Identifier of the category a record belongs to (a campaign id for passbook
/// records, a report type for field reports).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub(crate) String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single fetched business entity that can be filtered by category and
/// date range.
pub trait Record {
    fn id(&self) -> &str;

    /// `None` when the source timestamp was missing or could not be decoded.
    /// Such records fail every date bound that is set.
    fn timestamp(&self) -> Option<NaiveDateTime>;

    fn category(&self) -> &CategoryId;
}

/// Entry for a category selector chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub id: CategoryId,
    pub label: String,
}
