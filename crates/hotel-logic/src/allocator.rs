//! Room allocation strategies.
//!
//! All functions are pure: they read the layout and a snapshot of booked
//! rooms and return the rooms to book next. Merging the result into booking
//! state is the caller's job.
//!
//! # Contiguous allocation
//!
//! 1. **Same-floor run**: floors ascending; slide a `count`-sized window over
//!    each floor's free rooms and take the first window whose in-floor
//!    indices are consecutive.
//! 2. **Cross-floor fill**: if no run exists, start at each floor in turn and
//!    take free rooms from that floor upward until `count` are collected.
//!
//! The result is always exactly `count` rooms or empty, never a partial set.
//!
//! # Random allocation
//!
//! Draws a batch size uniformly from `[RANDOM_MIN, RANDOM_MAX]`, clamps it to
//! the number of free rooms, and takes that many rooms from a full shuffle.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::{RANDOM_MAX, RANDOM_MIN};
use crate::layout::{floor_of, index_on_floor, FloorId, Layout, RoomNumber};

/// Which phase of contiguous allocation produced a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Consecutive rooms on a single floor.
    SameFloorRun,
    /// Greedy fill across floors, lowest floor first.
    CrossFloorFill,
}

/// A successful contiguous allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub rooms: Vec<RoomNumber>,
    pub phase: Phase,
}

/// Free rooms in layout order.
pub fn available_rooms(layout: &Layout, booked: &HashSet<RoomNumber>) -> Vec<RoomNumber> {
    layout
        .all_rooms()
        .into_iter()
        .filter(|room| !booked.contains(room))
        .collect()
}

/// Free rooms grouped by floor, floors ascending, rooms ascending.
///
/// Floors with no free rooms are omitted.
pub fn available_by_floor(
    layout: &Layout,
    booked: &HashSet<RoomNumber>,
) -> Vec<(FloorId, Vec<RoomNumber>)> {
    layout
        .floors()
        .iter()
        .filter_map(|floor| {
            let free: Vec<RoomNumber> = floor
                .rooms
                .iter()
                .copied()
                .filter(|room| !booked.contains(room))
                .collect();
            (!free.is_empty()).then_some((floor.number, free))
        })
        .collect()
}

/// Whether `rooms` share a floor and their in-floor indices form an unbroken run.
///
/// Numbers that cannot name a room (`x00`) are never contiguous.
pub fn is_contiguous(rooms: &[RoomNumber]) -> bool {
    let Some(&first) = rooms.first() else {
        return false;
    };
    let floor = floor_of(first);
    if rooms.iter().any(|&r| floor_of(r) != floor || r % 100 == 0) {
        return false;
    }
    let mut indices: Vec<usize> = rooms.iter().map(|&r| index_on_floor(r)).collect();
    indices.sort_unstable();
    indices.windows(2).all(|w| w[1] == w[0] + 1)
}

/// First window of `count` free rooms on one floor with consecutive indices.
fn find_same_floor_run(
    floors: &[(FloorId, Vec<RoomNumber>)],
    count: usize,
) -> Option<Vec<RoomNumber>> {
    floors
        .iter()
        .filter(|(_, rooms)| rooms.len() >= count)
        .find_map(|(_, rooms)| rooms.windows(count).find(|w| is_contiguous(w)))
        .map(<[RoomNumber]>::to_vec)
}

/// Greedy accumulation from each starting floor upward.
///
/// Each start is an independent attempt; a short attempt is discarded and
/// the next start begins from scratch.
fn cross_floor_fill(floors: &[(FloorId, Vec<RoomNumber>)], count: usize) -> Option<Vec<RoomNumber>> {
    for start in 0..floors.len() {
        let mut collected: Vec<RoomNumber> = Vec::with_capacity(count);
        for (_, rooms) in &floors[start..] {
            if collected.len() >= count {
                break;
            }
            let need = count - collected.len();
            collected.extend(rooms.iter().take(need).copied());
        }
        if collected.len() >= count {
            collected.truncate(count);
            return Some(collected);
        }
    }
    None
}

/// Choose `count` free rooms, preferring a same-floor run.
///
/// Returns `None` when `count` is zero or fewer than `count` rooms are free.
pub fn plan_contiguous(
    layout: &Layout,
    booked: &HashSet<RoomNumber>,
    count: usize,
) -> Option<Placement> {
    if count == 0 {
        return None;
    }
    let floors = available_by_floor(layout, booked);
    let free: usize = floors.iter().map(|(_, rooms)| rooms.len()).sum();
    if count > free {
        return None;
    }

    if let Some(rooms) = find_same_floor_run(&floors, count) {
        return Some(Placement {
            rooms,
            phase: Phase::SameFloorRun,
        });
    }

    cross_floor_fill(&floors, count).map(|rooms| Placement {
        rooms,
        phase: Phase::CrossFloorFill,
    })
}

/// Rooms for a "Book" request: exactly `count` rooms, or empty if impossible.
pub fn allocate_contiguous(
    layout: &Layout,
    booked: &HashSet<RoomNumber>,
    count: usize,
) -> Vec<RoomNumber> {
    plan_contiguous(layout, booked, count)
        .map(|p| p.rooms)
        .unwrap_or_default()
}

/// Rooms for a "Random" request with the default batch range.
pub fn allocate_random(
    layout: &Layout,
    booked: &HashSet<RoomNumber>,
    rng: &mut impl Rng,
) -> Vec<RoomNumber> {
    allocate_random_between(layout, booked, RANDOM_MIN, RANDOM_MAX, rng)
}

/// Rooms for a "Random" request with an explicit inclusive batch range.
///
/// An inverted range is treated as `min..=min`.
pub fn allocate_random_between(
    layout: &Layout,
    booked: &HashSet<RoomNumber>,
    min: usize,
    max: usize,
    rng: &mut impl Rng,
) -> Vec<RoomNumber> {
    let mut pool = available_rooms(layout, booked);
    if pool.is_empty() {
        return pool;
    }
    let target = rng.gen_range(min..=max.max(min));
    let count = target.min(pool.len());
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}
