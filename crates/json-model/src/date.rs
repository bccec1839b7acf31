//! Date transformation seam for string-encoded timestamps.

use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::JsonModelError;

/// Two-way mapping between a date and its string form inside JSON.
pub trait DateTransformer {
    /// Parses `raw`, failing with [`JsonModelError::InvalidFormat`] when it
    /// does not match the expected format.
    fn date(&self, raw: &str) -> Result<OffsetDateTime, JsonModelError>;

    /// Formats `date` into its string form.
    fn string(&self, date: OffsetDateTime) -> String;

    /// Derived encode: the formatted string's JSON value.
    fn json(&self, date: OffsetDateTime) -> Value {
        Value::String(self.string(date))
    }
}

/// RFC 3339 timestamps, e.g. `2016-09-18T10:44:00Z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc3339Transformer;

impl DateTransformer for Rfc3339Transformer {
    fn date(&self, raw: &str) -> Result<OffsetDateTime, JsonModelError> {
        OffsetDateTime::parse(raw, &Rfc3339).map_err(|_| JsonModelError::InvalidFormat)
    }

    fn string(&self, date: OffsetDateTime) -> String {
        // RFC 3339 formatting only fails for years outside 0..=9999.
        date.format(&Rfc3339).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_round_trip() {
        let transformer = Rfc3339Transformer;
        let date = transformer.date("2016-09-18T10:44:00Z").unwrap();
        assert_eq!(date.unix_timestamp(), 1_474_195_440);
        assert_eq!(transformer.string(date), "2016-09-18T10:44:00Z");
        assert_eq!(
            transformer.json(date),
            Value::String("2016-09-18T10:44:00Z".to_owned())
        );
    }

    #[test]
    fn malformed_date_string_fails() {
        let transformer = Rfc3339Transformer;
        assert_eq!(
            transformer.date("18-09-2016"),
            Err(JsonModelError::InvalidFormat)
        );
        assert_eq!(transformer.date(""), Err(JsonModelError::InvalidFormat));
    }
}
