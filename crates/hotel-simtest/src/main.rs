//! Hotel Allocator Headless Harness
//!
//! Replays booking scenarios against the allocator and the booking session.
//! Runs entirely in-process, with no UI and no storage.
//!
//! Usage:
//!   cargo run -p hotel-simtest
//!   cargo run -p hotel-simtest -- --verbose
//!   cargo run -p hotel-simtest -- --json

use std::collections::HashSet;

use hotel_core::prelude::*;
use hotel_logic::allocator::{allocate_contiguous, allocate_random, plan_contiguous, Phase};
use hotel_logic::config::{MAX_REQUEST, MIN_REQUEST, RANDOM_MAX, RANDOM_MIN};
use hotel_logic::layout::{floor_of, index_on_floor};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Layout description (same JSON a front end would load) ───────────────
const LAYOUT_JSON: &str = include_str!("../../../data/hotel_layout.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    let json = std::env::args().any(|a| a == "--json");
    println!("=== Hotel Allocator Harness ===\n");

    let mut results = Vec::new();

    // 1. Layout description vs compiled-in layout
    results.extend(validate_layout(verbose));

    // 2. Contiguous allocation scenarios
    results.extend(validate_contiguous_scenarios(verbose));

    // 3. Random allocation sweep
    results.extend(validate_random_sweep(verbose));

    // 4. Session flow: validation, fill, reset
    let session = run_session_flow(verbose, &mut results);

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    if verbose {
        println!();
        print_grid(&session);
    }

    if json {
        match serde_json::to_string_pretty(&session.summary()) {
            Ok(s) => println!("\n{}", s),
            Err(e) => eprintln!("summary serialization failed: {}", e),
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn print_grid(session: &BookingSession) {
    println!("--- Floor grid (. free, # booked, * random) ---");
    for row in session.grid().iter().rev() {
        let Some(&(first, _)) = row.first() else {
            continue;
        };
        let cells: String = row.iter().map(|(_, state)| state.marker()).collect();
        println!("  {:>2} | {}", floor_of(first), cells);
    }
}

// ── 1. Layout ───────────────────────────────────────────────────────────

fn validate_layout(verbose: bool) -> Vec<TestResult> {
    println!("--- Layout ---");
    let mut results = Vec::new();

    let parsed: Layout = match serde_json::from_str(LAYOUT_JSON) {
        Ok(l) => l,
        Err(e) => {
            results.push(TestResult {
                name: "layout_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };

    let standard = Layout::standard();
    results.push(TestResult {
        name: "layout_matches_standard".into(),
        passed: parsed == standard,
        detail: format!(
            "{} floors / {} rooms in JSON",
            parsed.floors().len(),
            parsed.room_count()
        ),
    });

    results.push(TestResult {
        name: "layout_room_count".into(),
        passed: standard.room_count() == 97,
        detail: format!("{} rooms", standard.room_count()),
    });

    let mismatched: Vec<RoomNumber> = standard
        .floors()
        .iter()
        .flat_map(|f| {
            f.rooms
                .iter()
                .enumerate()
                .filter(move |&(i, &r)| floor_of(r) != f.number || index_on_floor(r) != i)
                .map(|(_, &r)| r)
        })
        .collect();
    results.push(TestResult {
        name: "layout_numbering_encodes_position".into(),
        passed: mismatched.is_empty(),
        detail: if mismatched.is_empty() {
            "floor/index derivable for every room".into()
        } else {
            format!("mismatched rooms: {:?}", mismatched)
        },
    });

    let bad: Result<Layout, _> = serde_json::from_str(r#"[{ "number": 1, "rooms": [101, 103] }]"#);
    results.push(TestResult {
        name: "layout_rejects_gaps".into(),
        passed: bad.is_err(),
        detail: "corridor gap refused at load".into(),
    });

    if verbose {
        for floor in standard.floors() {
            println!(
                "  floor {:>2}: {}..{} ({} rooms)",
                floor.number,
                floor.rooms.first().copied().unwrap_or_default(),
                floor.rooms.last().copied().unwrap_or_default(),
                floor.rooms.len()
            );
        }
    }

    results
}

// ── 2. Contiguous scenarios ─────────────────────────────────────────────

fn all_booked_except(layout: &Layout, free: &[RoomNumber]) -> HashSet<RoomNumber> {
    layout
        .all_rooms()
        .into_iter()
        .filter(|r| !free.contains(r))
        .collect()
}

fn validate_contiguous_scenarios(verbose: bool) -> Vec<TestResult> {
    println!("--- Contiguous allocation ---");
    let mut results = Vec::new();
    let layout = Layout::standard();

    // A: fresh hotel
    let a = allocate_contiguous(&layout, &HashSet::new(), 3);
    results.push(TestResult {
        name: "scenario_a_fresh".into(),
        passed: a == vec![101, 102, 103],
        detail: format!("{:?}", a),
    });

    // B: floor 1 full
    let floor_one: HashSet<RoomNumber> = (101..=110).collect();
    let b = allocate_contiguous(&layout, &floor_one, 3);
    results.push(TestResult {
        name: "scenario_b_floor_one_full".into(),
        passed: b == vec![201, 202, 203],
        detail: format!("{:?}", b),
    });

    // C: only 105 and 201 free → cross-floor
    let c_booked = all_booked_except(&layout, &[105, 201]);
    let c = plan_contiguous(&layout, &c_booked, 2);
    results.push(TestResult {
        name: "scenario_c_cross_floor".into(),
        passed: c
            .as_ref()
            .is_some_and(|p| p.phase == Phase::CrossFloorFill && p.rooms == vec![105, 201]),
        detail: format!("{:?}", c),
    });

    // D: hotel full
    let everything: HashSet<RoomNumber> = layout.all_rooms().into_iter().collect();
    let d = allocate_contiguous(&layout, &everything, 1);
    let mut rng = StdRng::seed_from_u64(0);
    let d_random = allocate_random(&layout, &everything, &mut rng);
    results.push(TestResult {
        name: "scenario_d_full_hotel".into(),
        passed: d.is_empty() && d_random.is_empty(),
        detail: "contiguous=[] random=[]".into(),
    });

    // Every valid count on a fresh hotel is a first-floor run
    for count in MIN_REQUEST..=MAX_REQUEST {
        let rooms = allocate_contiguous(&layout, &HashSet::new(), count);
        let expected: Vec<RoomNumber> = (101..101 + count as RoomNumber).collect();
        if verbose {
            println!("  count {} → {:?}", count, rooms);
        }
        results.push(TestResult {
            name: format!("fresh_count_{}", count),
            passed: rooms == expected,
            detail: format!("{:?}", rooms),
        });
    }

    // Determinism over a fragmented booking state
    let fragmented: HashSet<RoomNumber> = layout
        .all_rooms()
        .into_iter()
        .filter(|r| r % 3 == 0)
        .collect();
    let first = plan_contiguous(&layout, &fragmented, 3);
    let second = plan_contiguous(&layout, &fragmented, 3);
    results.push(TestResult {
        name: "contiguous_deterministic".into(),
        passed: first == second && first.is_some(),
        detail: format!("{:?}", first),
    });

    results
}

// ── 3. Random sweep ─────────────────────────────────────────────────────

fn validate_random_sweep(verbose: bool) -> Vec<TestResult> {
    println!("--- Random allocation ---");
    let mut results = Vec::new();
    let layout = Layout::standard();
    let all: HashSet<RoomNumber> = layout.all_rooms().into_iter().collect();

    let mut rng = StdRng::seed_from_u64(2024);
    let mut min_seen = usize::MAX;
    let mut max_seen = 0;
    let mut violations = 0;
    const RUNS: usize = 1000;

    for _ in 0..RUNS {
        let picked = allocate_random(&layout, &HashSet::new(), &mut rng);
        let distinct: HashSet<RoomNumber> = picked.iter().copied().collect();
        min_seen = min_seen.min(picked.len());
        max_seen = max_seen.max(picked.len());
        if distinct.len() != picked.len()
            || !distinct.is_subset(&all)
            || !(RANDOM_MIN..=RANDOM_MAX).contains(&picked.len())
        {
            violations += 1;
        }
    }

    if verbose {
        println!(
            "  {} runs: batch sizes {}..={}",
            RUNS, min_seen, max_seen
        );
    }

    results.push(TestResult {
        name: "scenario_e_random_bounds".into(),
        passed: violations == 0,
        detail: format!(
            "{} runs, {} violations, sizes {}..={}",
            RUNS, violations, min_seen, max_seen
        ),
    });

    // Repeated random bookings never overlap
    let mut session = BookingSession::new();
    let mut overlaps = 0;
    while let Ok(rooms) = session.book_random_with(&mut rng) {
        if rooms.len() != rooms.iter().collect::<HashSet<_>>().len() {
            overlaps += 1;
        }
    }
    results.push(TestResult {
        name: "random_fills_without_double_booking".into(),
        passed: overlaps == 0 && session.available_count() == 0,
        detail: format!(
            "{} random bookings, {} free left",
            session.bookings().len(),
            session.available_count()
        ),
    });

    results
}

// ── 4. Session flow ─────────────────────────────────────────────────────

fn run_session_flow(verbose: bool, results: &mut Vec<TestResult>) -> BookingSession {
    println!("--- Session flow ---");
    let mut session = BookingSession::new();

    for input in ["", "abc", "0", "6", "-1"] {
        let outcome = session.book_input(input);
        if verbose {
            if let Err(ref e) = outcome {
                println!("  input {:?} → {}", input, e);
            }
        }
        results.push(TestResult {
            name: format!("rejects_input_{:?}", input),
            passed: matches!(outcome, Err(BookingError::InvalidRequestCount(_)))
                && session.bookings().is_empty(),
            detail: outcome.map_or_else(|e| e.to_string(), |r| format!("booked {:?}", r)),
        });
    }

    let mut manual_batches = 0;
    while session.book(MAX_REQUEST).is_ok() {
        manual_batches += 1;
    }
    results.push(TestResult {
        name: "manual_fill".into(),
        passed: manual_batches == 19 && session.available_count() == 2,
        detail: format!(
            "{} batches of {}, {} free",
            manual_batches,
            MAX_REQUEST,
            session.available_count()
        ),
    });

    let insufficient = session.book(3);
    results.push(TestResult {
        name: "insufficient_is_reported".into(),
        passed: matches!(
            insufficient,
            Err(BookingError::NoCombinationFound {
                requested: 3,
                available: 2
            })
        ),
        detail: format!("{:?}", insufficient),
    });

    session.reset();
    let after_reset = session.book(3);
    results.push(TestResult {
        name: "reset_restores_fresh".into(),
        passed: after_reset.as_deref() == Ok(&[101, 102, 103][..]),
        detail: format!("{:?}", after_reset),
    });

    let mut rng = StdRng::seed_from_u64(7);
    let random = session.book_random_with(&mut rng);
    results.push(TestResult {
        name: "random_after_manual".into(),
        passed: random.as_ref().is_ok_and(|rooms| {
            rooms
                .iter()
                .all(|r| session.room_state(*r) == RoomState::RandomBooked)
        }),
        detail: format!(
            "{} manual, {} random",
            session.bookings().count_of(BookingKind::Manual),
            session.bookings().count_of(BookingKind::Random)
        ),
    });

    session
}
