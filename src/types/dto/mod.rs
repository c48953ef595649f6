// Data transfer objects - API request/response models
pub mod chat;
pub mod common;
pub mod community;
pub mod dashboard;
pub mod farming;
pub mod finance;
pub mod insurance;
pub mod notifications;
pub mod partnerships;
pub mod risk;
pub mod users;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::errors::InternalError;

/// Parse a stored fixed-point decimal string. Stored values are written by
/// the stores themselves, so a failure here means corrupt data.
pub(crate) fn parse_decimal(field: &str, raw: &str) -> Result<Decimal, InternalError> {
    raw.parse::<Decimal>()
        .map_err(|e| InternalError::parse(field, format!("{:?}: {}", raw, e)))
}

/// Decode a stored JSON array of URL strings.
pub(crate) fn urls_from_json(
    field: &str,
    value: Option<Value>,
) -> Result<Option<Vec<String>>, InternalError> {
    value
        .map(|v| serde_json::from_value(v).map_err(|e| InternalError::parse(field, e.to_string())))
        .transpose()
}
