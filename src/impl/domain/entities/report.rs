use chrono::NaiveDateTime;

use super::record::{CategoryId, Record};

/// Field report submitted for an outlet.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: String,
    pub report_type: CategoryId,
    pub title: String,
    pub outlet_name: Option<String>,
    pub submitted_at: Option<NaiveDateTime>,
    pub status: Option<String>,
    pub remarks: Option<String>,
    /// Location of the downloadable PDF rendition, when the backend has one.
    pub pdf_url: Option<String>,
}

impl Record for Report {
    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        self.submitted_at
    }

    fn category(&self) -> &CategoryId {
        &self.report_type
    }
}
