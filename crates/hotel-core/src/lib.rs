//! Hotel Core - booking session for the room allocator
//!
//! The allocation algorithms in `hotel-logic` are pure. This crate is the
//! collaborator that sits between them and a front end: it owns the booked
//! rooms, validates requests before the allocator runs, merges results with
//! the right provenance tag, and answers "what state is this room in" for
//! whatever renders the floor grid.
//!
//! # Example
//!
//! ```rust
//! use hotel_core::prelude::*;
//!
//! let mut session = BookingSession::new();
//!
//! let rooms = session.book_input("3").unwrap();
//! assert_eq!(rooms, vec![101, 102, 103]);
//!
//! session.book_random().unwrap();
//! session.reset();
//! assert!(session.bookings().is_empty());
//! ```

pub mod engine;
pub mod error;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::{BookingSession, SessionSummary};
    pub use crate::error::BookingError;
    pub use hotel_logic::booking::{BookingKind, RoomState};
    pub use hotel_logic::config::BookingLimits;
    pub use hotel_logic::layout::{Layout, RoomNumber};
}
