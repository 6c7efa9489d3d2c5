use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::errors::InvalidIsoCurrencyCode;

/// Runtime settings for decoding and projecting portal records. Every field
/// is optional in the RON source; absent fields take the defaults below.
#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Page size used when the caller only picks a page number.
    pub default_page_size: usize,
    /// Currency assumed for passbook amounts that carry no currency code.
    pub default_currency: String,
    /// Decode profile images a second time when the first pass yields base64
    /// text of a known image header.
    pub decode_double_encoded_images: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            default_currency: "INR".to_string(),
            decode_double_encoded_images: true,
        }
    }
}

impl PortalConfig {
    pub fn default_currency(&self) -> Result<Currency, ServerError> {
        Currency::from_code(&self.default_currency)
            .ok_or_else(|| InvalidIsoCurrencyCode::new(&self.default_currency))
    }
}
