//! Booking records and the set of currently booked rooms.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::layout::RoomNumber;

/// Which allocation produced a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    /// Contiguity-seeking allocation (the "Book" action).
    Manual,
    /// Bulk random allocation (the "Random" action).
    Random,
}

/// A booked room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub room: RoomNumber,
    #[serde(rename = "type")]
    pub kind: BookingKind,
}

/// Display state of a single room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomState {
    Free,
    Booked,
    RandomBooked,
}

impl RoomState {
    /// Single-character marker for text grids.
    pub fn marker(self) -> char {
        match self {
            RoomState::Free => '.',
            RoomState::Booked => '#',
            RoomState::RandomBooked => '*',
        }
    }
}

impl From<BookingKind> for RoomState {
    fn from(kind: BookingKind) -> Self {
        match kind {
            BookingKind::Manual => RoomState::Booked,
            BookingKind::Random => RoomState::RandomBooked,
        }
    }
}

/// Every booked room, keyed by room number.
///
/// Grows only through [`BookingSet::merge`] and empties only through
/// [`BookingSet::clear`]; individual rooms are never released.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSet {
    bookings: BTreeMap<RoomNumber, Booking>,
}

impl BookingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn contains(&self, room: RoomNumber) -> bool {
        self.bookings.contains_key(&room)
    }

    pub fn get(&self, room: RoomNumber) -> Option<&Booking> {
        self.bookings.get(&room)
    }

    /// Display state of a room; rooms not in the set are free.
    pub fn state_of(&self, room: RoomNumber) -> RoomState {
        self.bookings
            .get(&room)
            .map_or(RoomState::Free, |b| b.kind.into())
    }

    /// Bookings in ascending room order.
    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.values()
    }

    /// Number of bookings of one kind.
    pub fn count_of(&self, kind: BookingKind) -> usize {
        self.bookings.values().filter(|b| b.kind == kind).count()
    }

    /// Snapshot of booked room numbers, as handed to the allocator.
    pub fn rooms(&self) -> HashSet<RoomNumber> {
        self.bookings.keys().copied().collect()
    }

    /// Add freshly allocated rooms, all tagged `kind`.
    ///
    /// All-or-nothing: if any room is already booked (or listed twice),
    /// nothing is added and that room is returned as the error.
    pub fn merge(&mut self, rooms: &[RoomNumber], kind: BookingKind) -> Result<(), RoomNumber> {
        let mut incoming = HashSet::with_capacity(rooms.len());
        for &room in rooms {
            if self.contains(room) || !incoming.insert(room) {
                return Err(room);
            }
        }
        for &room in rooms {
            self.bookings.insert(room, Booking { room, kind });
        }
        Ok(())
    }

    /// Drop every booking.
    pub fn clear(&mut self) {
        self.bookings.clear();
    }
}
