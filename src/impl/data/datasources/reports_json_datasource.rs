use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::{debug, warn};

use crate::{
    data::models::{envelope_model::parse_envelope, timestamp_model::TimestampModel},
    entities::{CategoryId, Report},
    errors::{InvalidJson, MissingRecordId},
};

use super::utils::{non_empty, read_payload};

#[async_trait]
pub(crate) trait ReportsJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<Report>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<Report>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReport {
    #[serde(alias = "_id", alias = "reportId")]
    id: Option<String>,
    #[serde(alias = "type")]
    report_type: Option<String>,
    #[serde(alias = "name")]
    title: Option<String>,
    #[serde(alias = "retailerName", alias = "shopName")]
    outlet_name: Option<String>,
    #[serde(default, alias = "createdAt", alias = "submissionDate")]
    submitted_at: TimestampModel,
    status: Option<String>,
    remarks: Option<String>,
    #[serde(alias = "pdf", alias = "pdfLink")]
    pdf_url: Option<String>,
}

pub(crate) struct ReportsJsonDatasourceImpl;

impl ReportsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportsJsonDatasource for ReportsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Report>, ServerError> {
        let raw: Vec<RawReport> =
            parse_envelope(s).map_err(|e| InvalidJson::with_debug("report list", &e))?;
        let reports = raw
            .into_iter()
            .enumerate()
            .map(|(i, r)| {
                let id = non_empty(r.id).ok_or_else(|| MissingRecordId::new("Report", i))?;
                let report_type = non_empty(r.report_type).unwrap_or_else(|| "general".to_string());
                Ok(Report {
                    title: non_empty(r.title).unwrap_or_else(|| id.clone()),
                    id,
                    report_type: CategoryId::new(report_type),
                    outlet_name: non_empty(r.outlet_name),
                    submitted_at: r.submitted_at.into(),
                    status: non_empty(r.status),
                    remarks: non_empty(r.remarks),
                    pdf_url: non_empty(r.pdf_url),
                })
            })
            .collect::<Result<Vec<_>, ServerError>>()?;

        let undated = reports.iter().filter(|r| r.submitted_at.is_none()).count();
        if undated > 0 {
            warn!(undated, "reports without a readable submission date");
        }
        debug!(count = reports.len(), "decoded report list");
        Ok(reports)
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<Report>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(&read_payload(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wrapped_list_with_aliases() {
        let json = r#"{
            "success": true,
            "data": [
                {"_id": "r1", "type": "visit", "name": "Shelf check", "createdAt": "2024-04-02T10:00:00Z", "pdfLink": "https://cdn/r1.pdf"},
                {"id": "r2", "reportType": "audit", "submittedAt": "garbage", "remarks": ""}
            ]
        }"#;
        let reports = ReportsJsonDatasourceImpl::new().from_string(json).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].report_type, CategoryId::new("visit"));
        assert_eq!(reports[0].title, "Shelf check");
        assert!(reports[0].submitted_at.is_some());
        assert_eq!(reports[0].pdf_url.as_deref(), Some("https://cdn/r1.pdf"));
        assert_eq!(reports[1].title, "r2");
        assert_eq!(reports[1].submitted_at, None);
        assert_eq!(reports[1].remarks, None);
    }

    #[test]
    fn decodes_bare_list() {
        let reports = ReportsJsonDatasourceImpl::new()
            .from_string(r#"[{"id": "r1"}]"#)
            .unwrap();
        assert_eq!(reports[0].report_type, CategoryId::new("general"));
    }

    #[test]
    fn rejects_records_without_id_and_invalid_json() {
        let ds = ReportsJsonDatasourceImpl::new();
        assert!(ds.from_string(r#"[{"title": "orphan"}]"#).is_err());
        assert!(ds.from_string("{not json").is_err());
    }

    #[tokio::test]
    async fn reads_from_file() {
        let path = std::env::temp_dir().join("fractic_retailer_portal_reports_ds.json");
        tokio::fs::write(&path, r#"[{"id": "r9", "type": "stock"}]"#)
            .await
            .unwrap();
        let reports = ReportsJsonDatasourceImpl::new()
            .from_file(&path)
            .await
            .unwrap();
        assert_eq!(reports[0].id, "r9");
        assert!(ReportsJsonDatasourceImpl::new()
            .from_file(std::env::temp_dir().join("fractic_retailer_portal_missing.json"))
            .await
            .is_err());
    }
}
