use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use serde_json::Value;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Lenient timestamp: anything that cannot be read as a date decodes to
/// `None` rather than failing the whole payload.
#[derive(Debug, Default)]
pub(crate) struct TimestampModel(pub Option<NaiveDateTime>);

impl TimestampModel {
    pub(crate) fn parse(s: &str) -> Self {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return TimestampModel(Some(dt.naive_utc()));
        }
        let date_time = DATE_TIME_FORMATS
            .iter()
            .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok());
        if date_time.is_some() {
            return TimestampModel(date_time);
        }
        TimestampModel(
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
                .map(|d| d.and_time(NaiveTime::MIN)),
        )
    }

    /// Milliseconds since the Unix epoch.
    fn from_millis(millis: i64) -> Self {
        TimestampModel(DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc()))
    }
}

impl<'de> Deserialize<'de> for TimestampModel {
    fn deserialize<D>(deserializer: D) -> Result<TimestampModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => TimestampModel::parse(&s),
            Value::Number(n) => n
                .as_i64()
                .map(TimestampModel::from_millis)
                .unwrap_or_default(),
            _ => TimestampModel(None),
        })
    }
}

impl From<TimestampModel> for Option<NaiveDateTime> {
    fn from(model: TimestampModel) -> Self {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(y, m, d).and_then(|d| d.and_hms_opt(h, min, s))
    }

    #[test]
    fn accepts_common_api_spellings() {
        assert_eq!(TimestampModel::parse("2024-02-10").0, at(2024, 2, 10, 0, 0, 0));
        assert_eq!(TimestampModel::parse("10-02-2024").0, at(2024, 2, 10, 0, 0, 0));
        assert_eq!(TimestampModel::parse("10/02/2024").0, at(2024, 2, 10, 0, 0, 0));
        assert_eq!(
            TimestampModel::parse("2024-02-10T08:15:30").0,
            at(2024, 2, 10, 8, 15, 30)
        );
        assert_eq!(
            TimestampModel::parse("2024-02-10T08:15:30.250Z").0.map(|t| t.date()),
            NaiveDate::from_ymd_opt(2024, 2, 10)
        );
        assert_eq!(
            TimestampModel::parse("2024-02-10T10:15:30+02:00").0,
            at(2024, 2, 10, 8, 15, 30)
        );
    }

    #[test]
    fn malformed_values_decode_to_none() {
        assert_eq!(TimestampModel::parse("not a date").0, None);
        assert_eq!(TimestampModel::parse("").0, None);
        let model: TimestampModel = serde_json::from_str("true").unwrap();
        assert_eq!(model.0, None);
        let model: TimestampModel = serde_json::from_str("null").unwrap();
        assert_eq!(model.0, None);
    }

    #[test]
    fn numbers_are_epoch_millis() {
        let model: TimestampModel = serde_json::from_str("1707552930000").unwrap();
        assert_eq!(model.0, at(2024, 2, 10, 8, 15, 30));
    }
}
