//! Request limits for the booking actions.
//!
//! ```
//! use hotel_logic::config::{validate_limits, BookingLimits};
//!
//! let limits = BookingLimits::default();
//! assert!(validate_limits(&limits).is_empty());
//! assert!(limits.allows(5));
//! assert!(!limits.allows(6));
//! ```

use serde::{Deserialize, Serialize};

/// Smallest room count a guest may request.
pub const MIN_REQUEST: usize = 1;
/// Largest room count a guest may request.
pub const MAX_REQUEST: usize = 5;
/// Lower bound of the random-booking batch size.
pub const RANDOM_MIN: usize = 5;
/// Upper bound of the random-booking batch size.
pub const RANDOM_MAX: usize = 30;

/// Bounds on how many rooms each action may book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingLimits {
    /// Inclusive range for the contiguous "Book" action.
    pub min_request: usize,
    pub max_request: usize,
    /// Inclusive range the "Random" action draws its batch size from.
    pub random_min: usize,
    pub random_max: usize,
}

impl Default for BookingLimits {
    fn default() -> Self {
        Self {
            min_request: MIN_REQUEST,
            max_request: MAX_REQUEST,
            random_min: RANDOM_MIN,
            random_max: RANDOM_MAX,
        }
    }
}

impl BookingLimits {
    /// Whether `count` is an acceptable request for the "Book" action.
    pub fn allows(&self, count: usize) -> bool {
        (self.min_request..=self.max_request).contains(&count)
    }
}

/// Limits validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimitsError {
    /// A request of zero rooms would always succeed trivially.
    ZeroMinimumRequest,
    /// A random batch of zero rooms is indistinguishable from a full hotel.
    ZeroMinimumRandom,
    /// `min_request > max_request`.
    RequestRangeEmpty { min: usize, max: usize },
    /// `random_min > random_max`.
    RandomRangeEmpty { min: usize, max: usize },
}

impl std::fmt::Display for LimitsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LimitsError::ZeroMinimumRequest => write!(f, "Minimum request must be at least 1"),
            LimitsError::ZeroMinimumRandom => {
                write!(f, "Minimum random batch must be at least 1")
            }
            LimitsError::RequestRangeEmpty { min, max } => {
                write!(f, "Request range {}..={} is empty", min, max)
            }
            LimitsError::RandomRangeEmpty { min, max } => {
                write!(f, "Random batch range {}..={} is empty", min, max)
            }
        }
    }
}

impl std::error::Error for LimitsError {}

/// Validate limits, returning all errors found.
pub fn validate_limits(limits: &BookingLimits) -> Vec<LimitsError> {
    let mut errors = Vec::new();

    if limits.min_request == 0 {
        errors.push(LimitsError::ZeroMinimumRequest);
    }
    if limits.random_min == 0 {
        errors.push(LimitsError::ZeroMinimumRandom);
    }
    if limits.min_request > limits.max_request {
        errors.push(LimitsError::RequestRangeEmpty {
            min: limits.min_request,
            max: limits.max_request,
        });
    }
    if limits.random_min > limits.random_max {
        errors.push(LimitsError::RandomRangeEmpty {
            min: limits.random_min,
            max: limits.random_max,
        });
    }

    errors
}
