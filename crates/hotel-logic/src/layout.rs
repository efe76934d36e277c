//! Static building topology: floors and the rooms on them.
//!
//! A room number encodes its own position: the hundreds prefix is the floor
//! and the remainder (minus one) is the zero-based index along the corridor.
//! Rooms at index `i` and `i ± 1` on the same floor are physically adjacent.
//! `Layout::from_floors` enforces that every room obeys this encoding, so the
//! allocator can rely on `floor_of` / `index_on_floor` without lookups.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A room identifier, e.g. `304` is the fourth room on floor 3.
pub type RoomNumber = u32;

/// A floor identifier (`room / 100`).
pub type FloorId = u32;

/// Number of floors in the standard building.
pub const STANDARD_FLOORS: u32 = 10;

/// Rooms per floor on floors 1–9 of the standard building.
pub const ROOMS_PER_FLOOR: u32 = 10;

/// Rooms on the top floor of the standard building.
pub const TOP_FLOOR_ROOMS: u32 = 7;

/// Floor number of a room.
pub fn floor_of(room: RoomNumber) -> FloorId {
    room / 100
}

/// Zero-based position of a room along its floor.
///
/// Only meaningful for rooms that belong to a layout (room `x00` would
/// underflow, and no valid layout contains one).
pub fn index_on_floor(room: RoomNumber) -> usize {
    (room % 100) as usize - 1
}

/// One floor of the building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub number: FloorId,
    /// Rooms in corridor order (ascending).
    pub rooms: Vec<RoomNumber>,
}

impl Floor {
    /// Build a floor with rooms `number*100 + 1 ..= number*100 + room_count`.
    pub fn sequential(number: FloorId, room_count: u32) -> Self {
        let base = number * 100;
        Self {
            number,
            rooms: (1..=room_count).map(|i| base + i).collect(),
        }
    }
}

/// Ways a floor list can violate the room-number encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A floor has no rooms.
    EmptyFloor(FloorId),
    /// Floor numbers are not strictly ascending.
    FloorOutOfOrder { previous: FloorId, found: FloorId },
    /// `room / 100` does not match the floor it is listed on.
    RoomOnWrongFloor { room: RoomNumber, floor: FloorId },
    /// `room % 100 - 1` does not match its listed position.
    RoomOutOfPosition { room: RoomNumber, position: usize },
    /// The same room number appears twice.
    DuplicateRoom(RoomNumber),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::EmptyFloor(floor) => write!(f, "Floor {} has no rooms", floor),
            LayoutError::FloorOutOfOrder { previous, found } => write!(
                f,
                "Floor {} listed after floor {}; floors must be ascending",
                found, previous
            ),
            LayoutError::RoomOnWrongFloor { room, floor } => {
                write!(f, "Room {} listed on floor {}", room, floor)
            }
            LayoutError::RoomOutOfPosition { room, position } => {
                write!(f, "Room {} listed at position {}", room, position)
            }
            LayoutError::DuplicateRoom(room) => write!(f, "Room {} listed more than once", room),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Immutable floor/room topology.
///
/// ```
/// use hotel_logic::layout::Layout;
///
/// let layout = Layout::standard();
/// assert_eq!(layout.room_count(), 97);
/// assert_eq!(layout.all_rooms()[0], 101);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Floor>", into = "Vec<Floor>")]
pub struct Layout {
    floors: Vec<Floor>,
}

impl Layout {
    /// The compiled-in hotel: floors 1–9 with ten rooms each, floor 10 with seven.
    pub fn standard() -> Self {
        let floors = (1..=STANDARD_FLOORS)
            .map(|n| {
                let rooms = if n == STANDARD_FLOORS {
                    TOP_FLOOR_ROOMS
                } else {
                    ROOMS_PER_FLOOR
                };
                Floor::sequential(n, rooms)
            })
            .collect();
        Self { floors }
    }

    /// Build a layout from arbitrary floors, checking the room-number encoding.
    pub fn from_floors(floors: Vec<Floor>) -> Result<Self, LayoutError> {
        let mut seen = HashSet::new();
        let mut previous: Option<FloorId> = None;

        for floor in &floors {
            if let Some(prev) = previous {
                if floor.number <= prev {
                    return Err(LayoutError::FloorOutOfOrder {
                        previous: prev,
                        found: floor.number,
                    });
                }
            }
            previous = Some(floor.number);

            if floor.rooms.is_empty() {
                return Err(LayoutError::EmptyFloor(floor.number));
            }

            for (position, &room) in floor.rooms.iter().enumerate() {
                if !seen.insert(room) {
                    return Err(LayoutError::DuplicateRoom(room));
                }
                if floor_of(room) != floor.number {
                    return Err(LayoutError::RoomOnWrongFloor {
                        room,
                        floor: floor.number,
                    });
                }
                // Position check also rules out room x00 and unsorted floors.
                if room % 100 == 0 || index_on_floor(room) != position {
                    return Err(LayoutError::RoomOutOfPosition { room, position });
                }
            }
        }

        Ok(Self { floors })
    }

    /// Floors in ascending order.
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Look up a floor by number.
    pub fn floor(&self, number: FloorId) -> Option<&Floor> {
        self.floors.iter().find(|f| f.number == number)
    }

    /// Every room, floors in order, rooms in corridor order.
    pub fn all_rooms(&self) -> Vec<RoomNumber> {
        self.floors
            .iter()
            .flat_map(|f| f.rooms.iter().copied())
            .collect()
    }

    /// Total rooms in the building.
    pub fn room_count(&self) -> usize {
        self.floors.iter().map(|f| f.rooms.len()).sum()
    }

    /// Whether a room number belongs to this layout.
    pub fn contains(&self, room: RoomNumber) -> bool {
        self.floor(floor_of(room))
            .is_some_and(|f| f.rooms.binary_search(&room).is_ok())
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Floor>> for Layout {
    type Error = LayoutError;

    fn try_from(floors: Vec<Floor>) -> Result<Self, Self::Error> {
        Self::from_floors(floors)
    }
}

impl From<Layout> for Vec<Floor> {
    fn from(layout: Layout) -> Self {
        layout.floors
    }
}
