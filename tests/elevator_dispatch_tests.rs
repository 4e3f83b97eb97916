//! Tests for the SCAN sweep, boarding and alighting
//!
//! These drive a `Building` directly through its public operations so every
//! step can be checked against the expected queue and occupant contents.

use scan_elevator_sim::{Building, CapacityExceeded, Direction, FloorCollection, PassengerStatus};

/// Three floors, capacity one: A (to 3) boards, B (to 2) is left behind,
/// A rides to the top and alights
#[test]
fn test_single_seat_elevator_leaves_second_passenger_queued() {
    let mut building = Building::new(3, 1).unwrap();
    let a = building.enter("A");
    let b = building.enter("B");
    building.request_trip(a, 3).unwrap();
    building.request_trip(b, 2).unwrap();

    let boarding = building.board_elevator().unwrap();
    assert_eq!(boarding.boarded, vec![a]);
    assert_eq!(boarding.rejection, Some(CapacityExceeded { capacity: 1 }));
    assert_eq!(building.floor(1).unwrap().list_of(FloorCollection::UpQueue), vec![b]);

    let step = building.move_elevator().unwrap();
    assert_eq!(step.to_floor, 2);
    assert_eq!(step.direction, Direction::Up);
    assert!(step.alighted.is_empty());
    assert!(step.boarding.boarded.is_empty());
    assert!(!step.boarding.capacity_exceeded());

    let step = building.move_elevator().unwrap();
    assert_eq!(step.to_floor, 3);
    assert_eq!(building.elevator().direction(), Direction::Down);
    assert_eq!(step.alighted, vec![a]);
    assert!(step.boarding.boarded.is_empty());

    let a_record = building.passenger(a).unwrap();
    assert_eq!(a_record.status(), PassengerStatus::Resident);
    assert_eq!(a_record.current_floor(), Some(3));
    assert_eq!(a_record.destination_floor(), None);
    assert_eq!(building.floor(3).unwrap().residents(), &[a]);
    assert_eq!(building.passenger(b).unwrap().status(), PassengerStatus::Waiting);
    building.check_invariants().unwrap();
}

/// Five floors, capacity two, three waiting to go up: the first two board
#[test]
fn test_capacity_two_boards_first_two_in_queue_order() {
    let mut building = Building::new(5, 2).unwrap();
    let ids: Vec<_> = ["P2", "P4", "P5"].iter().map(|n| building.enter(*n)).collect();
    for (&id, destination) in ids.iter().zip([2, 4, 5]) {
        building.request_trip(id, destination).unwrap();
    }

    let boarding = building.board_elevator().unwrap();

    assert_eq!(boarding.boarded, vec![ids[0], ids[1]]);
    assert!(boarding.capacity_exceeded());
    assert_eq!(boarding.left_waiting, 1);
    assert_eq!(building.elevator().occupants(), &[ids[0], ids[1]]);
    assert_eq!(building.floor(1).unwrap().peek_first(Direction::Up), Some(ids[2]));
}

#[test]
fn test_empty_queue_boarding_reports_nothing() {
    let mut building = Building::new(4, 3).unwrap();
    building.enter("Idle");

    let boarding = building.board_elevator().unwrap();

    assert!(boarding.boarded.is_empty());
    assert!(boarding.rejection.is_none());
    assert_eq!(building.floor(1).unwrap().residents().len(), 1);
}

#[test]
fn test_direction_reverses_only_at_boundaries() {
    for floors in 2..=7u32 {
        let mut building = Building::new(floors, 1).unwrap();
        let mut previous_direction = building.elevator().direction();

        for _ in 0..(4 * floors) {
            let report = building.move_elevator().unwrap();
            assert_eq!(report.to_floor.abs_diff(report.from_floor), 1);

            let direction = building.elevator().direction();
            if report.to_floor == floors {
                assert_eq!(direction, Direction::Down, "{} floors", floors);
            } else if report.to_floor == 1 {
                assert_eq!(direction, Direction::Up, "{} floors", floors);
            } else {
                assert_eq!(direction, previous_direction, "reversed mid-shaft at {}", report.to_floor);
            }
            previous_direction = direction;
        }
    }
}

#[test]
fn test_queue_boards_in_fifo_order() {
    let mut building = Building::new(6, 10).unwrap();
    let ids: Vec<_> = (0..5).map(|i| building.enter(format!("P{}", i))).collect();
    for (&id, destination) in ids.iter().zip([6, 2, 5, 3, 4]) {
        building.request_trip(id, destination).unwrap();
    }

    let boarding = building.board_elevator().unwrap();
    assert_eq!(boarding.boarded, ids);
}

#[test]
fn test_queue_behind_departed_car_waits_for_next_visit() {
    let mut building = Building::new(3, 1).unwrap();
    let rider = building.enter("Rider");
    building.request_trip(rider, 3).unwrap();
    building.board_elevator().unwrap();

    // rider alights at 3, then queues down just as the car leaves
    building.move_elevator().unwrap();
    building.move_elevator().unwrap();
    assert_eq!(building.floor(3).unwrap().residents(), &[rider]);

    building.request_trip(rider, 1).unwrap();
    let step = building.move_elevator().unwrap();
    assert_eq!(step.to_floor, 2);
    assert!(step.boarding.boarded.is_empty());
    assert_eq!(building.floor(3).unwrap().queue_len(Direction::Down), 1);
}

#[test]
fn test_round_trip_down_queue() {
    let mut building = Building::new(4, 2).unwrap();
    let a = building.enter("A");
    building.request_trip(a, 4).unwrap();
    building.board_elevator().unwrap();

    for _ in 0..3 {
        building.move_elevator().unwrap();
    }
    assert_eq!(building.elevator().current_floor(), 4);
    assert_eq!(building.floor(4).unwrap().residents(), &[a]);

    // waiting at the top with the car already there: served on the next visit
    building.request_trip(a, 2).unwrap();
    let mut alighted_at = None;
    for _ in 0..10 {
        let step = building.move_elevator().unwrap();
        if step.alighted.contains(&a) {
            alighted_at = Some(step.to_floor);
            break;
        }
    }
    assert_eq!(alighted_at, Some(2));
    assert_eq!(building.passenger(a).unwrap().current_floor(), Some(2));
    building.check_invariants().unwrap();
}
