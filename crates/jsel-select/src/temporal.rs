//! # Date/Time Accessors
//!
//! A date/time is stored in JSON as text. The default accessors read the
//! pinned ISO-8601 profile (`yyyy-MM-ddTHH:mm:ss[.fffffff][Z|±HH:MM]`);
//! the `_with_format` accessors read an exact caller-supplied layout such
//! as `MM/dd/yyyy`. Text that does not match is a conversion error, never
//! absence.

use jsel_core::{require, JsonDateTime, JsonSelectionError};
use serde_json::Value;

use crate::checked::select_token;
use crate::element::FromJsonElement;
use crate::scalar::select_as;

pub fn select_datetime(root: &Value, path: &str) -> Result<Option<JsonDateTime>, JsonSelectionError> {
    select_as(root, path)
}

pub fn require_datetime(root: &Value, path: &str) -> Result<JsonDateTime, JsonSelectionError> {
    require(select_datetime(root, path)?, path)
}

/// Select a date/time written in an explicit layout.
///
/// Supported pattern runs: `yyyy yy MMMM MMM MM M dddd ddd dd d HH H hh h
/// mm m ss s fff ffffff fffffffff tt zzz`. Quoted text and `\x` escapes
/// are literals. A layout with no time field gives midnight; an hour
/// without minutes or seconds gets zeros for them; `hh` requires `tt`.
///
/// # Errors
///
/// [`JsonSelectionError::Conversion`] with target `datetime` when the
/// layout is unsupported or the text does not match it.
pub fn select_datetime_with_format(
    root: &Value,
    path: &str,
    format: &str,
) -> Result<Option<JsonDateTime>, JsonSelectionError> {
    select_token(root, path, JsonDateTime::accepted_kinds())?
        .and_then(Value::as_str)
        .map(|text| {
            JsonDateTime::parse_with_format(text, format).map_err(|source| {
                JsonSelectionError::Conversion {
                    path: path.to_string(),
                    target: JsonDateTime::TARGET,
                    source,
                }
            })
        })
        .transpose()
}

pub fn require_datetime_with_format(
    root: &Value,
    path: &str,
    format: &str,
) -> Result<JsonDateTime, JsonSelectionError> {
    require(select_datetime_with_format(root, path, format)?, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsel_core::ConversionError;
    use serde_json::json;

    #[test]
    fn test_iso_datetime_round_trips() {
        let doc = json!({"field": "2024-01-05T00:00:00"});
        let value = require_datetime(&doc, "$.field").unwrap();
        assert_eq!(value.to_round_trip(), "2024-01-05T00:00:00.0000000");
        assert_eq!(value.offset(), None);
    }

    #[test]
    fn test_iso_datetime_with_offset() {
        let doc = json!({"utc": "2024-01-05T10:30:00Z", "east": "2024-01-05T10:30:00.5+02:00"});
        assert_eq!(
            require_datetime(&doc, "$.utc").unwrap().to_round_trip(),
            "2024-01-05T10:30:00.0000000Z"
        );
        assert_eq!(
            require_datetime(&doc, "$.east").unwrap().to_round_trip(),
            "2024-01-05T10:30:00.5000000+02:00"
        );
    }

    #[test]
    fn test_custom_format() {
        let doc = json!({"field": "12/25/2023"});
        let value = require_datetime_with_format(&doc, "$.field", "MM/dd/yyyy").unwrap();
        assert_eq!(value.to_round_trip(), "2023-12-25T00:00:00.0000000");
    }

    #[test]
    fn test_custom_format_keeps_partial_time() {
        let doc = json!({"field": "2023-12-25 14"});
        let value = require_datetime_with_format(&doc, "$.field", "yyyy-MM-dd HH").unwrap();
        assert_eq!(value.to_round_trip(), "2023-12-25T14:00:00.0000000");

        let doc = json!({"field": "03/04/2022 07:30"});
        let err = select_datetime_with_format(&doc, "$.field", "MM/dd/yyyy hh:mm").unwrap_err();
        assert!(matches!(
            err,
            JsonSelectionError::Conversion {
                source: ConversionError::DateFormat { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_unparseable_text_is_conversion_error() {
        let doc = json!({"field": "hello"});
        let err = select_datetime(&doc, "$.field").unwrap_err();
        assert!(err.is_conversion(), "got: {err}");
        let err = require_datetime_with_format(&doc, "$.field", "MM/dd/yyyy").unwrap_err();
        assert!(err.is_conversion(), "got: {err}");
    }

    #[test]
    fn test_format_mismatch_is_conversion_error() {
        let doc = json!({"field": "2023-12-25"});
        let err = select_datetime_with_format(&doc, "$.field", "MM/dd/yyyy").unwrap_err();
        assert!(matches!(
            err,
            JsonSelectionError::Conversion {
                target: "datetime",
                source: ConversionError::DateTime { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_unsupported_format_is_conversion_error() {
        let doc = json!({"field": "12/25/2023"});
        let err = select_datetime_with_format(&doc, "$.field", "").unwrap_err();
        assert!(matches!(
            err,
            JsonSelectionError::Conversion {
                source: ConversionError::DateFormat { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_non_string_is_kind_mismatch() {
        let doc = json!({"field": 20240105});
        assert!(select_datetime(&doc, "$.field").unwrap_err().is_kind_mismatch());
        assert!(select_datetime_with_format(&doc, "$.field", "yyyyMMdd")
            .unwrap_err()
            .is_kind_mismatch());
    }

    #[test]
    fn test_absent_datetime() {
        let doc = json!({"field": null});
        assert_eq!(select_datetime(&doc, "$.field").unwrap(), None);
        assert_eq!(select_datetime_with_format(&doc, "$.field", "MM/dd/yyyy").unwrap(), None);
        assert!(require_datetime(&doc, "$.field").unwrap_err().is_missing());
        assert!(require_datetime_with_format(&doc, "$.field", "MM/dd/yyyy")
            .unwrap_err()
            .is_missing());
    }
}
