//! Pure room-allocation logic for the hotel booking system.
//!
//! This crate holds the building layout and the allocation algorithms. No
//! function here keeps state or performs I/O: callers pass in a snapshot of
//! booked rooms and get back the rooms to book next, which keeps every piece
//! unit-testable without a session or a UI.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`allocator`] | Same-floor run search, cross-floor fallback, random bulk pick |
//! | [`booking`] | Booking records, provenance tags, the booked-room set |
//! | [`config`] | Request and random-batch limits with validation |
//! | [`layout`] | Floors, room numbering, layout invariants |
//! | [`request`] | Parse-and-validate for user-entered room counts |

pub mod allocator;
pub mod booking;
pub mod config;
pub mod layout;
pub mod request;
