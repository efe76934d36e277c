//! Errors returned by booking session actions.
//!
//! Every error leaves the session's bookings exactly as they were.

use hotel_logic::config::LimitsError;
use hotel_logic::layout::RoomNumber;
use hotel_logic::request::InvalidCount;

/// Why a booking action did not book anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The requested count failed validation; the allocator was not called.
    InvalidRequestCount(InvalidCount),
    /// Neither a same-floor run nor a cross-floor fill could satisfy the request.
    NoCombinationFound { requested: usize, available: usize },
    /// A random booking was requested with every room already taken.
    NoRoomsAvailable,
    /// Merging the allocation would have booked a room twice.
    AlreadyBooked(RoomNumber),
    /// The session was configured with unusable limits.
    InvalidLimits(Vec<LimitsError>),
}

impl From<InvalidCount> for BookingError {
    fn from(e: InvalidCount) -> Self {
        BookingError::InvalidRequestCount(e)
    }
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::InvalidRequestCount(e) => write!(f, "{}", e),
            BookingError::NoCombinationFound {
                requested,
                available,
            } => write!(
                f,
                "Cannot book {} rooms: only {} available",
                requested, available
            ),
            BookingError::NoRoomsAvailable => write!(f, "No rooms available"),
            BookingError::AlreadyBooked(room) => write!(f, "Room {} is already booked", room),
            BookingError::InvalidLimits(errors) => {
                write!(f, "Invalid booking limits: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for BookingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BookingError::InvalidRequestCount(e) => Some(e),
            _ => None,
        }
    }
}
