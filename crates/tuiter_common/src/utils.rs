use crate::errors::TuiterServerError;
use bson::{oid::ObjectId, DateTime};

/**
 * Parse a hex string taken from a request path into an ObjectId
 *
 * @param id - the 24 character hex representation of the id
 * @returns - the parsed ObjectId, or InvalidObjectId if the string is malformed
 */
pub fn parse_object_id(id: &str) -> Result<ObjectId, TuiterServerError> {
    ObjectId::parse_str(id).map_err(|_| TuiterServerError::InvalidObjectId(id.to_string()))
}

/// Parses an optional ObjectId supplied as a hex string in a request body
pub fn parse_optional_object_id(
    value: &Option<String>,
) -> Result<Option<ObjectId>, TuiterServerError> {
    value.as_deref().map(parse_object_id).transpose()
}

/**
 * Parse an RFC 3339 timestamp supplied in a request body
 *
 * @param field - name of the body field, used in the error message
 * @param value - the timestamp string
 * @returns - the BSON datetime, or InvalidDate if the string is not RFC 3339
 */
pub fn parse_date(field: &str, value: &str) -> Result<DateTime, TuiterServerError> {
    DateTime::parse_rfc3339_str(value)
        .map_err(|_| TuiterServerError::InvalidDate(field.to_string(), value.to_string()))
}

/// Parses an optional body date, leaving `None` untouched
pub fn parse_optional_date(
    field: &str,
    value: &Option<String>,
) -> Result<Option<DateTime>, TuiterServerError> {
    value.as_deref().map(|v| parse_date(field, v)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn rejects_malformed_object_id() {
        let err = parse_object_id("not-an-id").unwrap_err();
        assert_eq!(err, TuiterServerError::InvalidObjectId("not-an-id".to_string()));
        assert!(parse_object_id("0123456789abcdef0123456").is_err());
    }

    #[test]
    fn optional_object_id_passes_none_through() {
        let id = ObjectId::new();
        assert_eq!(parse_optional_object_id(&Some(id.to_hex())).unwrap(), Some(id));
        assert!(parse_optional_object_id(&None).unwrap().is_none());
        assert!(parse_optional_object_id(&Some("abc".to_string())).is_err());
    }

    #[test]
    fn parses_rfc3339_dates() {
        let date = parse_date("postedOn", "2022-02-14T10:30:00Z").unwrap();
        assert_eq!(date.timestamp_millis(), 1_644_834_600_000);
        assert!(parse_optional_date("postedOn", &None).unwrap().is_none());
    }

    #[test]
    fn rejects_bad_dates() {
        match parse_date("sentOn", "yesterday") {
            Err(TuiterServerError::InvalidDate(field, value)) => {
                assert_eq!(field, "sentOn");
                assert_eq!(value, "yesterday");
            }
            other => panic!("expected InvalidDate, got {:?}", other),
        }
    }
}
