//! Request field validation helpers.
//!
//! Each helper returns an [`ErrorCode::InvalidRequest`](crate::domain::ErrorCode)
//! error with a `field` detail naming the offending input, so clients can
//! highlight the right form control.

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::{Error, RoomType};

fn field_error(field: &str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({ "field": field }))
}

/// Require a positive identifier.
pub fn parse_id(value: i32, field: &str) -> Result<i32, Error> {
    if value > 0 {
        Ok(value)
    } else {
        Err(field_error(field, format!("{field} must be positive")))
    }
}

/// Parse an ISO `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| field_error(field, format!("{field} must be a YYYY-MM-DD date")))
}

/// Parse a room type spelling.
pub fn parse_room_type(value: &str, field: &str) -> Result<RoomType, Error> {
    value.parse().map_err(|_| {
        field_error(
            field,
            format!("{field} must be one of General, Private, ICU"),
        )
    })
}

#[cfg(test)]
mod tests {
    //! Validation helper coverage.

    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[case(1)]
    #[case(i32::MAX)]
    fn positive_ids_pass(#[case] value: i32) {
        assert_eq!(parse_id(value, "patientId").expect("valid id"), value);
    }

    #[rstest]
    #[case(0)]
    #[case(-7)]
    fn non_positive_ids_are_rejected(#[case] value: i32) {
        let error = parse_id(value, "patientId").expect_err("invalid id");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.details(), Some(&json!({ "field": "patientId" })));
    }

    #[rstest]
    fn iso_dates_parse() {
        let date = parse_date("2025-03-14", "admissionDate").expect("valid date");
        assert_eq!(date.to_string(), "2025-03-14");
    }

    #[rstest]
    #[case("14/03/2025")]
    #[case("2025-13-01")]
    #[case("not a date")]
    fn malformed_dates_are_rejected(#[case] value: &str) {
        let error = parse_date(value, "dischargeDate").expect_err("invalid date");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.details(), Some(&json!({ "field": "dischargeDate" })));
    }

    #[rstest]
    #[case("General", RoomType::General)]
    #[case("Private", RoomType::Private)]
    #[case("ICU", RoomType::Icu)]
    fn known_room_types_parse(#[case] value: &str, #[case] expected: RoomType) {
        assert_eq!(
            parse_room_type(value, "roomType").expect("valid room type"),
            expected
        );
    }

    #[rstest]
    fn unknown_room_types_are_rejected() {
        let error = parse_room_type("Suite", "roomType").expect_err("invalid room type");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.details(), Some(&json!({ "field": "roomType" })));
    }
}
