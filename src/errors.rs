use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidJson, "Invalid {payload} (invalid JSON format).", { payload: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });
define_client_error!(
    MissingRecordId,
    "{record_type} record at position {index} has no identifier.",
    { record_type: &str, index: usize }
);
define_client_error!(InvalidBase64Image, "Profile image is not valid base64 data.");
define_client_error!(
    InvalidConfig,
    "Invalid portal config: {details}.",
    { details: &str }
);

// Projection-related.
define_client_error!(
    InvalidPageRequest,
    "Invalid page request (limit: {limit}, page: {page}). Both must be at least 1.",
    { limit: usize, page: usize }
);
define_client_error!(ReportNotFound, "No report found with id '{id}'.", { id: &str });
