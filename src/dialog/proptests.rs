//! Property-based tests for the dialog engine
//!
//! These tests verify key invariants hold across generated turns.

use super::validate::{
    validate_car, validate_flight, validate_hotel, CABIN_TYPES, CAR_TYPES, CITIES, COUNTRIES,
    ROOM_TYPES,
};
use super::*;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn test_context() -> DialogContext {
    DialogContext::new(today())
}

fn day(offset: u64) -> NaiveDate {
    today().checked_add_days(Days::new(offset)).unwrap()
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

/// A member of `set` with arbitrary letter case
fn arb_member(set: &'static [&'static str]) -> impl Strategy<Value = String> {
    (proptest::sample::select(set), any::<u64>()).prop_map(|(value, mask)| {
        value
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if (mask >> (i % 64)) & 1 == 1 {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect()
    })
}

fn arb_non_member(set: &'static [&'static str]) -> impl Strategy<Value = String> {
    "[a-z]{1,12}( [a-z]{1,8})?".prop_filter("must not be a member", move |value| {
        !set.contains(&value.as_str())
    })
}

fn arb_kind() -> impl Strategy<Value = ReservationKind> {
    prop_oneof![
        Just(ReservationKind::Hotel),
        Just(ReservationKind::Car),
        Just(ReservationKind::Flight),
    ]
}

fn arb_status() -> impl Strategy<Value = ConfirmationStatus> {
    prop_oneof![
        Just(ConfirmationStatus::None),
        Just(ConfirmationStatus::Denied),
        Just(ConfirmationStatus::Confirmed),
    ]
}

fn arb_phase() -> impl Strategy<Value = InvocationPhase> {
    prop_oneof![
        4 => Just(InvocationPhase::ValidateFields),
        1 => Just(InvocationPhase::ConfirmAndFulfill),
    ]
}

fn arb_slot_value(slot: Slot) -> BoxedStrategy<SlotValue> {
    match slot.slot_type() {
        SlotType::Date => prop_oneof![
            (0u64..60).prop_map(|offset| SlotValue::Date(day(offset))),
            Just(SlotValue::from("someday")),
        ]
        .boxed(),
        SlotType::Integer => prop_oneof![
            (-5i64..60).prop_map(SlotValue::Integer),
            Just(SlotValue::from("many")),
        ]
        .boxed(),
        SlotType::Text => prop_oneof![
            arb_member(CITIES).prop_map(SlotValue::Text),
            arb_member(ROOM_TYPES).prop_map(SlotValue::Text),
            Just(SlotValue::from("economy")),
            Just(SlotValue::from("australia")),
            Just(SlotValue::from("Tokyo")),
        ]
        .boxed(),
    }
}

/// Any subset of the kind's slots, each with a plausible or broken value
fn arb_slots(kind: ReservationKind) -> impl Strategy<Value = Slots> {
    let per_slot: Vec<_> = kind
        .slots()
        .iter()
        .map(|&slot| proptest::option::of(arb_slot_value(slot)).prop_map(move |v| (slot, v)))
        .collect();
    per_slot.prop_map(|values| {
        let mut slots = Slots::new();
        for (slot, value) in values {
            slots.set(slot, value);
        }
        slots
    })
}

fn arb_session() -> impl Strategy<Value = SessionState> {
    (
        proptest::option::of(arb_kind().prop_flat_map(|kind| {
            arb_slots(kind).prop_map(move |slots| Reservation::from_slots(kind, &slots))
        })),
        any::<bool>(),
    )
        .prop_map(|(last, auto)| SessionState {
            last_confirmed_reservation: last,
            confirmation_context: auto.then_some(ConfirmationContext::AutoPopulate),
            ..SessionState::default()
        })
}

fn arb_turn() -> impl Strategy<Value = Turn> {
    arb_kind().prop_flat_map(|kind| {
        (arb_slots(kind), arb_status(), arb_phase(), arb_session()).prop_map(
            move |(slots, status, phase, session)| {
                Turn::new(kind, slots)
                    .with_status(status)
                    .with_phase(phase)
                    .with_session(session)
            },
        )
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Whitelisted values pass regardless of case
    #[test]
    fn prop_members_accepted(
        city in arb_member(CITIES),
        room in arb_member(ROOM_TYPES),
        car in arb_member(CAR_TYPES),
        country in arb_member(COUNTRIES),
        cabin in arb_member(CABIN_TYPES),
    ) {
        let stay = Slots::new().with(Slot::Location, city.clone()).with(Slot::RoomType, room);
        prop_assert_eq!(validate_hotel(&stay, today()), Ok(()));

        let rental = Slots::new().with(Slot::PickUpCity, city.clone()).with(Slot::CarType, car);
        prop_assert_eq!(validate_car(&rental, today()), Ok(()));

        let trip = Slots::new()
            .with(Slot::ArrivalCountry, country)
            .with(Slot::ArrivalCity, city)
            .with(Slot::CabinType, cabin);
        prop_assert_eq!(validate_flight(&trip, today()), Ok(()));
    }

    // Values outside the whitelist fail on their own slot
    #[test]
    fn prop_non_members_rejected(city in arb_non_member(CITIES)) {
        let slots = Slots::new().with(Slot::PickUpCity, city.clone());
        let violation = validate_car(&slots, today());
        prop_assert!(violation.is_err());
        let violation = violation.unwrap_err();
        prop_assert_eq!(violation.slot, Slot::PickUpCity);
        prop_assert!(violation.message.contains(&city));
    }

    // Ordering rule: the later slot is blamed exactly when it is not after the earlier
    #[test]
    fn prop_return_must_follow_leave(leave in 0u64..400, ret in 0u64..400) {
        let slots = Slots::new()
            .with(Slot::LeaveDate, day(leave))
            .with(Slot::ReturnDate, day(ret));
        let result = validate_flight(&slots, today());
        if leave >= ret {
            prop_assert_eq!(result.map_err(|v| v.slot), Err(Slot::ReturnDate));
        } else {
            prop_assert_eq!(result, Ok(()));
        }
    }

    // Building the draft twice yields the same record and snapshot
    #[test]
    fn prop_builder_idempotent(
        (kind, slots) in arb_kind().prop_flat_map(|kind| (Just(kind), arb_slots(kind)))
    ) {
        let first = Reservation::from_slots(kind, &slots);
        let second = Reservation::from_slots(kind, &slots);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert_eq!(first, second);
    }

    // Any draft survives the session attribute encoding
    #[test]
    fn prop_session_round_trip(session in arb_session()) {
        let attributes = session.clone().into_attributes().unwrap();
        prop_assert_eq!(SessionState::from_attributes(attributes), session);
    }

    // Transitions are deterministic
    #[test]
    fn prop_transition_pure(turn in arb_turn()) {
        let a = transition(turn.clone(), &test_context());
        let b = transition(turn, &test_context());
        prop_assert_eq!(a, b);
    }

    // The auto-populate marker is only left set alongside a confirm prompt
    #[test]
    fn prop_context_only_with_confirm(turn in arb_turn()) {
        let result = transition(turn, &test_context());
        if result.session.is_auto_populating() {
            prop_assert!(
                matches!(result.action, DialogAction::ConfirmIntent { .. } | DialogAction::ElicitSlot { .. }),
                "context left set with {:?}",
                result.action
            );
        }
        if matches!(result.action, DialogAction::ConfirmIntent { .. }) {
            prop_assert!(result.session.is_auto_populating());
        }
    }

    // Elicit actions only name slots of the turn's intent, and always clear them
    #[test]
    fn prop_elicit_targets_own_slot(turn in arb_turn()) {
        let kind = turn.kind;
        let result = transition(turn, &test_context());
        if let DialogAction::ElicitSlot { slot_to_elicit, slots, .. } = &result.action {
            prop_assert!(kind.has_slot(*slot_to_elicit));
            prop_assert!(!slots.contains(*slot_to_elicit));
        }
    }

    // Fulfilling moves the draft into the last confirmed reservation
    #[test]
    fn prop_fulfilled_records_draft(turn in arb_turn()) {
        let kind = turn.kind;
        let expected = Reservation::from_slots(kind, &turn.slots);
        let result = transition(turn, &test_context());
        if let DialogAction::Close { fulfillment_state: FulfillmentState::Fulfilled, .. } = result.action {
            prop_assert_eq!(result.session.current_reservation, None);
            prop_assert_eq!(result.session.last_confirmed_reservation, Some(expected));
        }
    }
}
