//! Booking session - owns booking state and drives the allocator

use hotel_logic::allocator::{
    allocate_random_between, available_rooms, plan_contiguous, Phase, Placement,
};
use hotel_logic::booking::{BookingKind, BookingSet, RoomState};
use hotel_logic::config::{validate_limits, BookingLimits};
use hotel_logic::layout::{Layout, RoomNumber};
use hotel_logic::request::{parse_room_count, validate_room_count};
use rand::Rng;
use serde::Serialize;

use crate::error::BookingError;

/// One front-desk session: a layout, the current bookings, and request limits.
///
/// Every action computes its allocation from a snapshot of the bookings and
/// merges the whole result at once, or changes nothing and returns an error.
#[derive(Debug, Clone)]
pub struct BookingSession {
    layout: Layout,
    bookings: BookingSet,
    limits: BookingLimits,
}

/// Serializable view of a session for reports.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub total_rooms: usize,
    pub available: usize,
    pub manual: usize,
    pub random: usize,
    pub limits: BookingLimits,
    pub bookings: BookingSet,
}

impl BookingSession {
    /// A session over the standard hotel with default limits.
    pub fn new() -> Self {
        Self {
            layout: Layout::standard(),
            bookings: BookingSet::new(),
            limits: BookingLimits::default(),
        }
    }

    /// A session over a custom layout and limits.
    pub fn with_layout(layout: Layout, limits: BookingLimits) -> Result<Self, BookingError> {
        let errors = validate_limits(&limits);
        if !errors.is_empty() {
            return Err(BookingError::InvalidLimits(errors));
        }
        Ok(Self {
            layout,
            bookings: BookingSet::new(),
            limits,
        })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn bookings(&self) -> &BookingSet {
        &self.bookings
    }

    pub fn limits(&self) -> &BookingLimits {
        &self.limits
    }

    /// Rooms not currently booked.
    pub fn available_count(&self) -> usize {
        self.layout.room_count() - self.bookings.len()
    }

    /// Book `count` rooms, preferring consecutive rooms on one floor.
    pub fn book(&mut self, count: usize) -> Result<Vec<RoomNumber>, BookingError> {
        self.plan_and_book(count).map(|p| p.rooms)
    }

    /// Like [`book`](Self::book) but also reports which phase placed the rooms.
    pub fn plan_and_book(&mut self, count: usize) -> Result<Placement, BookingError> {
        let value = i64::try_from(count).unwrap_or(i64::MAX);
        let count = validate_room_count(value, &self.limits).inspect_err(|e| {
            log::warn!("Rejected booking request of {}: {}", count, e);
        })?;
        self.book_validated(count)
    }

    /// Parse a user-entered count and book that many rooms.
    pub fn book_input(&mut self, input: &str) -> Result<Vec<RoomNumber>, BookingError> {
        let count = parse_room_count(input, &self.limits).inspect_err(|e| {
            log::warn!("Rejected booking input {:?}: {}", input, e);
        })?;
        self.book_validated(count).map(|p| p.rooms)
    }

    fn book_validated(&mut self, count: usize) -> Result<Placement, BookingError> {
        let snapshot = self.bookings.rooms();
        let Some(placement) = plan_contiguous(&self.layout, &snapshot, count) else {
            let available = self.available_count();
            log::warn!(
                "No combination of {} rooms found ({} available)",
                count,
                available
            );
            return Err(BookingError::NoCombinationFound {
                requested: count,
                available,
            });
        };

        match placement.phase {
            Phase::SameFloorRun => log::debug!("Same-floor run: {:?}", placement.rooms),
            Phase::CrossFloorFill => log::debug!("Cross-floor fill: {:?}", placement.rooms),
        }

        self.bookings
            .merge(&placement.rooms, BookingKind::Manual)
            .map_err(BookingError::AlreadyBooked)?;
        log::info!(
            "Booked {} rooms: {:?} ({} available)",
            placement.rooms.len(),
            placement.rooms,
            self.available_count()
        );
        Ok(placement)
    }

    /// Book a random batch of rooms anywhere in the building.
    pub fn book_random(&mut self) -> Result<Vec<RoomNumber>, BookingError> {
        let mut rng = rand::thread_rng();
        self.book_random_with(&mut rng)
    }

    /// Random booking with a caller-supplied RNG (seeded in tests and harnesses).
    pub fn book_random_with(&mut self, rng: &mut impl Rng) -> Result<Vec<RoomNumber>, BookingError> {
        let snapshot = self.bookings.rooms();
        let rooms = allocate_random_between(
            &self.layout,
            &snapshot,
            self.limits.random_min,
            self.limits.random_max,
            rng,
        );
        if rooms.is_empty() {
            log::warn!("Random booking skipped: no rooms available");
            return Err(BookingError::NoRoomsAvailable);
        }

        self.bookings
            .merge(&rooms, BookingKind::Random)
            .map_err(BookingError::AlreadyBooked)?;
        log::info!(
            "Randomly booked {} rooms ({} available)",
            rooms.len(),
            self.available_count()
        );
        Ok(rooms)
    }

    /// Release every booking.
    pub fn reset(&mut self) {
        log::info!("Reset: releasing {} bookings", self.bookings.len());
        self.bookings.clear();
    }

    /// Display state of one room.
    pub fn room_state(&self, room: RoomNumber) -> RoomState {
        self.bookings.state_of(room)
    }

    /// Rooms and their states, one row per floor in layout order.
    pub fn grid(&self) -> Vec<Vec<(RoomNumber, RoomState)>> {
        self.layout
            .floors()
            .iter()
            .map(|floor| {
                floor
                    .rooms
                    .iter()
                    .map(|&room| (room, self.bookings.state_of(room)))
                    .collect()
            })
            .collect()
    }

    /// Free rooms in layout order.
    pub fn available_rooms(&self) -> Vec<RoomNumber> {
        available_rooms(&self.layout, &self.bookings.rooms())
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            total_rooms: self.layout.room_count(),
            available: self.available_count(),
            manual: self.bookings.count_of(BookingKind::Manual),
            random: self.bookings.count_of(BookingKind::Random),
            limits: self.limits,
            bookings: self.bookings.clone(),
        }
    }
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_logic::config::LimitsError;
    use hotel_logic::layout::Floor;
    use hotel_logic::request::InvalidCount;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_book_fresh_session() {
        let mut session = BookingSession::new();
        assert_eq!(session.book(3).unwrap(), vec![101, 102, 103]);
        assert_eq!(session.room_state(101), RoomState::Booked);
        assert_eq!(session.room_state(104), RoomState::Free);
        assert_eq!(session.available_count(), 94);
    }

    #[test]
    fn test_consecutive_books_fill_forward() {
        let mut session = BookingSession::new();
        session.book(5).unwrap();
        session.book(5).unwrap();
        assert_eq!(session.book(3).unwrap(), vec![201, 202, 203]);
    }

    #[test]
    fn test_invalid_count_changes_nothing() {
        let mut session = BookingSession::new();
        for bad in [0, 6, 100] {
            let err = session.book(bad).unwrap_err();
            assert!(matches!(
                err,
                BookingError::InvalidRequestCount(InvalidCount::OutOfRange { .. })
            ));
        }
        assert!(session.bookings().is_empty());
    }

    #[test]
    fn test_book_input_parses() {
        let mut session = BookingSession::new();
        assert_eq!(session.book_input("2").unwrap(), vec![101, 102]);
        assert_eq!(
            session.book_input("two"),
            Err(BookingError::InvalidRequestCount(InvalidCount::NotANumber(
                "two".into()
            )))
        );
        assert_eq!(
            session.book_input("").unwrap_err().to_string(),
            "Enter the number of rooms to book"
        );
        assert_eq!(session.bookings().len(), 2);
    }

    #[test]
    fn test_out_of_range_message() {
        let mut session = BookingSession::new();
        let err = session.book_input("7").unwrap_err();
        assert_eq!(
            err.to_string(),
            "You can book minimum of 1, maximum of 5 rooms"
        );
    }

    #[test]
    fn test_no_combination_is_reported() {
        let mut session = BookingSession::new();
        let mut rng = StdRng::seed_from_u64(5);
        while session.book_random_with(&mut rng).is_ok() {}
        assert_eq!(session.available_count(), 0);
        assert_eq!(
            session.book(1),
            Err(BookingError::NoCombinationFound {
                requested: 1,
                available: 0
            })
        );
        assert_eq!(
            session.book_random_with(&mut rng),
            Err(BookingError::NoRoomsAvailable)
        );
    }

    #[test]
    fn test_cross_floor_phase_reported() {
        let floors = vec![Floor::sequential(1, 2), Floor::sequential(2, 2)];
        let layout = Layout::from_floors(floors).unwrap();
        let mut session = BookingSession::with_layout(layout, BookingLimits::default()).unwrap();
        let placement = session.plan_and_book(3).unwrap();
        assert_eq!(placement.phase, Phase::CrossFloorFill);
        assert_eq!(placement.rooms, vec![101, 102, 201]);
        assert_eq!(
            session.book(2),
            Err(BookingError::NoCombinationFound {
                requested: 2,
                available: 1
            })
        );
    }

    #[test]
    fn test_random_tags_and_bounds() {
        let mut session = BookingSession::new();
        let mut rng = StdRng::seed_from_u64(42);
        let rooms = session.book_random_with(&mut rng).unwrap();
        assert!((5..=30).contains(&rooms.len()));
        for room in &rooms {
            assert_eq!(session.room_state(*room), RoomState::RandomBooked);
        }
        assert_eq!(session.summary().random, rooms.len());
        assert_eq!(session.summary().manual, 0);
    }

    #[test]
    fn test_manual_after_random_avoids_taken_rooms() {
        let mut session = BookingSession::new();
        let mut rng = StdRng::seed_from_u64(8);
        let random = session.book_random_with(&mut rng).unwrap();
        let manual = session.book(4).unwrap();
        assert!(manual.iter().all(|r| !random.contains(r)));
        assert_eq!(session.bookings().len(), random.len() + 4);
    }

    #[test]
    fn test_reset_restores_fresh_behavior() {
        let mut session = BookingSession::new();
        session.book(5).unwrap();
        session.book_random_with(&mut StdRng::seed_from_u64(1)).unwrap();
        session.reset();
        assert!(session.bookings().is_empty());
        assert_eq!(session.available_count(), 97);
        let fresh = BookingSession::new().book(3).unwrap();
        assert_eq!(session.book(3).unwrap(), fresh);
    }

    #[test]
    fn test_reset_twice_is_harmless() {
        let mut session = BookingSession::new();
        session.book(2).unwrap();
        session.reset();
        session.reset();
        assert!(session.bookings().is_empty());
    }

    #[test]
    fn test_grid_mirrors_layout() {
        let mut session = BookingSession::new();
        session.book(2).unwrap();
        let grid = session.grid();
        assert_eq!(grid.len(), 10);
        assert_eq!(grid[0][0], (101, RoomState::Booked));
        assert_eq!(grid[0][2], (103, RoomState::Free));
        assert_eq!(grid[9].len(), 7);
    }

    #[test]
    fn test_invalid_limits_rejected() {
        let limits = BookingLimits {
            min_request: 0,
            ..BookingLimits::default()
        };
        let result = BookingSession::with_layout(Layout::standard(), limits);
        assert!(matches!(result, Err(BookingError::InvalidLimits(_))));
    }

    #[test]
    fn test_zero_random_batch_limits_rejected() {
        let limits = BookingLimits {
            random_min: 0,
            random_max: 0,
            ..BookingLimits::default()
        };
        match BookingSession::with_layout(Layout::standard(), limits) {
            Err(BookingError::InvalidLimits(errors)) => {
                assert_eq!(errors, vec![LimitsError::ZeroMinimumRandom]);
            }
            other => panic!("expected InvalidLimits, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_random_limits() {
        let limits = BookingLimits {
            random_min: 2,
            random_max: 2,
            ..BookingLimits::default()
        };
        let mut session = BookingSession::with_layout(Layout::standard(), limits).unwrap();
        let rooms = session.book_random_with(&mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(rooms.len(), 2);
    }

    #[test]
    fn test_summary_serializes() {
        let mut session = BookingSession::new();
        session.book(1).unwrap();
        let json = serde_json::to_value(session.summary()).unwrap();
        assert_eq!(json["total_rooms"], 97);
        assert_eq!(json["manual"], 1);
        assert_eq!(json["bookings"]["bookings"]["101"]["type"], "manual");
    }
}
