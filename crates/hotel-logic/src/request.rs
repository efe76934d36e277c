//! Parse-and-validate step for the user-entered room count.
//!
//! The allocator is only ever called with a count that passed through here
//! (or an equivalent `BookingLimits::allows` check).

use crate::config::BookingLimits;

/// Why a room-count entry was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidCount {
    /// Nothing was entered.
    Empty,
    /// The entry is not an integer.
    NotANumber(String),
    /// The entry is an integer outside the allowed range.
    OutOfRange { value: i64, min: usize, max: usize },
}

impl std::fmt::Display for InvalidCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidCount::Empty => write!(f, "Enter the number of rooms to book"),
            InvalidCount::NotANumber(input) => {
                write!(f, "'{}' is not a number of rooms", input)
            }
            InvalidCount::OutOfRange { min, max, .. } => write!(
                f,
                "You can book minimum of {}, maximum of {} rooms",
                min, max
            ),
        }
    }
}

impl std::error::Error for InvalidCount {}

/// Check an already-numeric request against the limits.
pub fn validate_room_count(value: i64, limits: &BookingLimits) -> Result<usize, InvalidCount> {
    match usize::try_from(value) {
        Ok(count) if limits.allows(count) => Ok(count),
        _ => Err(InvalidCount::OutOfRange {
            value,
            min: limits.min_request,
            max: limits.max_request,
        }),
    }
}

/// Parse user text into a room count within `limits`.
///
/// ```
/// use hotel_logic::config::BookingLimits;
/// use hotel_logic::request::{parse_room_count, InvalidCount};
///
/// let limits = BookingLimits::default();
/// assert_eq!(parse_room_count(" 3 ", &limits), Ok(3));
/// assert!(matches!(parse_room_count("9", &limits), Err(InvalidCount::OutOfRange { .. })));
/// ```
pub fn parse_room_count(input: &str, limits: &BookingLimits) -> Result<usize, InvalidCount> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InvalidCount::Empty);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InvalidCount::NotANumber(trimmed.to_string()))?;
    validate_room_count(value, limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> BookingLimits {
        BookingLimits::default()
    }

    #[test]
    fn accepts_every_count_in_range() {
        for n in 1..=5 {
            assert_eq!(parse_room_count(&n.to_string(), &limits()), Ok(n));
        }
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_room_count("  2\n", &limits()), Ok(2));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_room_count("", &limits()), Err(InvalidCount::Empty));
        assert_eq!(parse_room_count("   ", &limits()), Err(InvalidCount::Empty));
    }

    #[test]
    fn non_numeric_input() {
        assert_eq!(
            parse_room_count("abc", &limits()),
            Err(InvalidCount::NotANumber("abc".into()))
        );
        assert!(matches!(
            parse_room_count("2.5", &limits()),
            Err(InvalidCount::NotANumber(_))
        ));
        assert!(matches!(
            parse_room_count("3 rooms", &limits()),
            Err(InvalidCount::NotANumber(_))
        ));
    }

    #[test]
    fn zero_and_negative_out_of_range() {
        assert!(matches!(
            parse_room_count("0", &limits()),
            Err(InvalidCount::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            parse_room_count("-2", &limits()),
            Err(InvalidCount::OutOfRange { value: -2, .. })
        ));
    }

    #[test]
    fn above_maximum_message() {
        let err = parse_room_count("6", &limits()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "You can book minimum of 1, maximum of 5 rooms"
        );
    }

    #[test]
    fn custom_limits_respected() {
        let wide = BookingLimits {
            max_request: 8,
            ..BookingLimits::default()
        };
        assert_eq!(parse_room_count("8", &wide), Ok(8));
        assert!(parse_room_count("9", &wide).is_err());
    }
}
