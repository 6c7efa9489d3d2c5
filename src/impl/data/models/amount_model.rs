use std::str::FromStr;

use fractic_server_error::ServerError;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::InvalidAmount;

/// Amount sent either as a JSON number or as display text ("1,250.50",
/// "(300)" for negatives). Absent or null amounts are zero.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct AmountModel(pub f64);

impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(',', "");
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(AmountModel(0.0));
        }
        let is_negative = raw.starts_with('(') && raw.ends_with(')');
        let numeric_part = raw.trim_matches(|c| c == '(' || c == ')').trim();
        let amount = numeric_part
            .parse::<f64>()
            .map_err(|_| InvalidAmount::new(s))?;
        Ok(AmountModel(if is_negative { -amount } else { amount }))
    }
}

impl<'de> Deserialize<'de> for AmountModel {
    fn deserialize<D>(deserializer: D) -> Result<AmountModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => Ok(AmountModel(n.as_f64().unwrap_or_default())),
            Value::String(s) => AmountModel::from_str(&s).map_err(serde::de::Error::custom),
            Value::Null => Ok(AmountModel::default()),
            other => Err(serde::de::Error::custom(format!(
                "expected amount, found {other}"
            ))),
        }
    }
}

impl From<AmountModel> for f64 {
    fn from(model: AmountModel) -> Self {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_text() {
        assert_eq!(AmountModel::from_str("1,250.50").unwrap().0, 1250.5);
        assert_eq!(AmountModel::from_str("(300)").unwrap().0, -300.0);
        assert_eq!(AmountModel::from_str("  ").unwrap().0, 0.0);
        assert!(AmountModel::from_str("twelve").is_err());
    }

    #[test]
    fn deserializes_numbers_strings_and_null() {
        let amounts: Vec<AmountModel> = serde_json::from_str(r#"[42, "1,000", null, -7.5]"#).unwrap();
        let values: Vec<f64> = amounts.into_iter().map(f64::from).collect();
        assert_eq!(values, vec![42.0, 1000.0, 0.0, -7.5]);
        assert!(serde_json::from_str::<AmountModel>("{}").is_err());
    }
}
