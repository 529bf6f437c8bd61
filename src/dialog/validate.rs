//! Slot validation rules
//!
//! Each intent runs its checks in a fixed order and stops at the first
//! violation; only that one is surfaced to the user.

use super::dates::day_difference;
use super::field::{Slot, SlotValue, Slots};
use super::reservation::ReservationKind;
use chrono::NaiveDate;

pub const CITIES: &[&str] = &[
    "new york",
    "los angeles",
    "chicago",
    "houston",
    "philadelphia",
    "phoenix",
    "san antonio",
    "san diego",
    "dallas",
    "san jose",
    "austin",
    "jacksonville",
    "san francisco",
    "indianapolis",
    "columbus",
    "fort worth",
    "charlotte",
    "detroit",
    "el paso",
    "seattle",
    "denver",
    "washington dc",
    "memphis",
    "boston",
    "nashville",
    "baltimore",
    "portland",
    "sydney",
    "melbourne",
    "hobart",
    "brisbane",
    "darwin",
    "perth",
    "canberra",
    "adelaide",
];

pub const COUNTRIES: &[&str] = &["america", "australia"];

pub const ROOM_TYPES: &[&str] = &["queen", "king", "deluxe"];

pub const CAR_TYPES: &[&str] = &["economy", "standard", "midsize", "full size", "minivan", "luxury"];

pub const CABIN_TYPES: &[&str] = &["economy", "business", "first"];

pub const MIN_NIGHTS: i64 = 1;
pub const MAX_NIGHTS: i64 = 30;
pub const MAX_RENTAL_DAYS: i64 = 30;
pub const MIN_DRIVER_AGE: i64 = 18;
pub const MIN_PARTY_SIZE: i64 = 1;

const NOT_IN_ADVANCE: &str =
    "Reservations must be scheduled at least one day in advance.  Can you try a different date?";

/// The first slot that failed validation on a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub slot: Slot,
    pub message: String,
}

impl Violation {
    pub fn new(slot: Slot, message: impl Into<String>) -> Self {
        Self {
            slot,
            message: message.into(),
        }
    }
}

pub type Validation = Result<(), Violation>;

/// Case-insensitive membership in one of the fixed value sets
pub fn is_member(set: &[&str], value: &str) -> bool {
    let value = value.trim().to_lowercase();
    set.contains(&value.as_str())
}

/// Run the intent's checks in order, returning the first violation
pub fn validate(kind: ReservationKind, slots: &Slots, today: NaiveDate) -> Validation {
    match kind {
        ReservationKind::Hotel => validate_hotel(slots, today),
        ReservationKind::Car => validate_car(slots, today),
        ReservationKind::Flight => validate_flight(slots, today),
    }
}

pub fn validate_hotel(slots: &Slots, today: NaiveDate) -> Validation {
    check_member(slots, Slot::Location, CITIES, |location| {
        format!(
            "We currently do not support {location} as a valid destination.  Can you try a city closer to home?"
        )
    })?;

    let check_in = check_date(
        slots,
        Slot::CheckInDate,
        "I did not understand your check in date.  When would you like to check in?",
    )?;
    check_future(Slot::CheckInDate, check_in, today)?;

    // Checkout is check-in plus nights, so the lower bound keeps it after check-in.
    check_range(
        slots,
        Slot::Nights,
        MIN_NIGHTS,
        Some(MAX_NIGHTS),
        "You can make a reservations from one to thirty nights.  How many nights would you like to stay for?",
    )?;

    check_member(slots, Slot::RoomType, ROOM_TYPES, |_| {
        "I did not recognize that room type.  Would you like to stay in a queen, king, or deluxe room?"
            .to_string()
    })
}

pub fn validate_car(slots: &Slots, today: NaiveDate) -> Validation {
    check_member(slots, Slot::PickUpCity, CITIES, |city| {
        format!("We currently do not support {city} as a valid destination.  Can you try a different city?")
    })?;

    let pick_up = check_date(
        slots,
        Slot::PickUpDate,
        "I did not understand your departure date.  When would you like to pick up your car rental?",
    )?;
    check_future(Slot::PickUpDate, pick_up, today)?;

    let return_date = check_date(
        slots,
        Slot::ReturnDate,
        "I did not understand your return date.  When would you like to return your car rental?",
    )?;

    check_after(
        Slot::ReturnDate,
        pick_up,
        return_date,
        "Your return date must be after your pick up date.  Can you try a different return date?",
    )?;

    if let (Some(pick_up), Some(return_date)) = (pick_up, return_date) {
        if day_difference(return_date, pick_up) > MAX_RENTAL_DAYS {
            return Err(Violation::new(
                Slot::ReturnDate,
                "You can reserve a car for up to thirty days.  Can you try a different return date?",
            ));
        }
    }

    check_range(
        slots,
        Slot::DriverAge,
        MIN_DRIVER_AGE,
        None,
        "Your driver must be at least eighteen to rent a car.  Can you provide the age of a different driver?",
    )?;

    check_member(slots, Slot::CarType, CAR_TYPES, |_| {
        "I did not recognize that model.  What type of car would you like to rent?  \
         Popular cars are economy, midsize, or luxury"
            .to_string()
    })
}

pub fn validate_flight(slots: &Slots, _today: NaiveDate) -> Validation {
    check_member(slots, Slot::ArrivalCountry, COUNTRIES, |country| {
        format!(
            "We currently do not support {country} as a valid destination. Can you try the country you are currently in?"
        )
    })?;

    check_member(slots, Slot::ArrivalCity, CITIES, |city| {
        format!(
            "We currently do not support {city} as a valid destination. Can you try a different city closer to home?"
        )
    })?;

    let leave = check_date(
        slots,
        Slot::LeaveDate,
        "I did not understand your departure date.  When would you like to leave?",
    )?;
    let return_date = check_date(
        slots,
        Slot::ReturnDate,
        "I did not understand your return date. When would you like to return home?",
    )?;

    check_after(
        Slot::ReturnDate,
        leave,
        return_date,
        "Your return date must be after your departure date. Can you try a different return date?",
    )?;

    check_member(slots, Slot::CabinType, CABIN_TYPES, |_| {
        "I did not recognize that type of seating class.  What class would you like to travel?  \
         Popular classes are economy, business, or first class"
            .to_string()
    })?;

    check_range(
        slots,
        Slot::Amount,
        MIN_PARTY_SIZE,
        None,
        "Your party must include at least one traveller.  How many guests are flying?",
    )
}

fn check_member(
    slots: &Slots,
    slot: Slot,
    set: &[&str],
    message: impl FnOnce(&str) -> String,
) -> Validation {
    match slots.get(slot) {
        Some(value) => {
            let text = value.to_string();
            if is_member(set, &text) {
                Ok(())
            } else {
                Err(Violation::new(slot, message(&text)))
            }
        }
        None => Ok(()),
    }
}

/// A present date slot must hold a parsed date
fn check_date(slots: &Slots, slot: Slot, message: &str) -> Result<Option<NaiveDate>, Violation> {
    match slots.get(slot) {
        Some(SlotValue::Date(date)) => Ok(Some(*date)),
        Some(_) => Err(Violation::new(slot, message)),
        None => Ok(None),
    }
}

fn check_future(slot: Slot, date: Option<NaiveDate>, today: NaiveDate) -> Validation {
    match date {
        Some(date) if date <= today => Err(Violation::new(slot, NOT_IN_ADVANCE)),
        _ => Ok(()),
    }
}

/// When both ends are present the later one must be strictly after the
/// earlier; the violation names the later slot.
pub fn check_after(
    later_slot: Slot,
    earlier: Option<NaiveDate>,
    later: Option<NaiveDate>,
    message: &str,
) -> Validation {
    match (earlier, later) {
        (Some(earlier), Some(later)) if earlier >= later => {
            Err(Violation::new(later_slot, message))
        }
        _ => Ok(()),
    }
}

/// Integer slot within `[min, max]`; unparsable text fails with the same message
fn check_range(
    slots: &Slots,
    slot: Slot,
    min: i64,
    max: Option<i64>,
    message: &str,
) -> Validation {
    match slots.get(slot) {
        Some(SlotValue::Integer(n)) if *n >= min && max.map_or(true, |max| *n <= max) => Ok(()),
        Some(_) => Err(Violation::new(slot, message)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 3, 1)
    }

    fn violated_slot(result: Validation) -> Option<Slot> {
        result.err().map(|v| v.slot)
    }

    #[test]
    fn test_empty_slots_are_valid() {
        for kind in [ReservationKind::Hotel, ReservationKind::Car, ReservationKind::Flight] {
            assert_eq!(validate(kind, &Slots::new(), today()), Ok(()));
        }
    }

    #[test]
    fn test_unsupported_location_names_value() {
        let slots = Slots::new().with(Slot::Location, "Tokyo");
        let violation = validate_hotel(&slots, today()).unwrap_err();
        assert_eq!(violation.slot, Slot::Location);
        assert!(violation.message.contains("Tokyo"));
    }

    #[test]
    fn test_membership_ignores_case() {
        assert!(is_member(CITIES, "NEW York"));
        assert!(is_member(COUNTRIES, "Australia"));
        assert!(is_member(CAR_TYPES, "Full Size"));
        assert!(!is_member(CABIN_TYPES, "premium economy"));
    }

    #[test]
    fn test_check_in_must_be_future() {
        let same_day = Slots::new().with(Slot::CheckInDate, today());
        let violation = validate_hotel(&same_day, today()).unwrap_err();
        assert_eq!(violation.slot, Slot::CheckInDate);
        assert!(violation.message.contains("at least one day in advance"));

        let tomorrow = Slots::new().with(Slot::CheckInDate, date(2024, 3, 2));
        assert_eq!(validate_hotel(&tomorrow, today()), Ok(()));
    }

    #[test]
    fn test_unparsed_date_is_violation() {
        let slots = Slots::new().with(Slot::CheckInDate, "whenever");
        let violation = validate_hotel(&slots, today()).unwrap_err();
        assert_eq!(violation.slot, Slot::CheckInDate);
        assert!(violation.message.contains("did not understand"));
    }

    #[test]
    fn test_nights_bounds() {
        for (nights, ok) in [(0, false), (1, true), (30, true), (31, false)] {
            let slots = Slots::new().with(Slot::Nights, nights);
            assert_eq!(validate_hotel(&slots, today()).is_ok(), ok, "nights={nights}");
        }
        let text = Slots::new().with(Slot::Nights, "a few");
        assert_eq!(violated_slot(validate_hotel(&text, today())), Some(Slot::Nights));
    }

    #[test]
    fn test_car_rules() {
        let base = Slots::new()
            .with(Slot::PickUpCity, "Chicago")
            .with(Slot::PickUpDate, date(2024, 3, 10));

        let backwards = base.clone().with(Slot::ReturnDate, date(2024, 3, 9));
        assert_eq!(violated_slot(validate_car(&backwards, today())), Some(Slot::ReturnDate));

        let too_long = base.clone().with(Slot::ReturnDate, date(2024, 4, 10));
        let violation = validate_car(&too_long, today()).unwrap_err();
        assert_eq!(violation.slot, Slot::ReturnDate);
        assert!(violation.message.contains("thirty days"));

        let thirty = base.clone().with(Slot::ReturnDate, date(2024, 4, 9));
        assert_eq!(validate_car(&thirty, today()), Ok(()));

        let young = base.clone().with(Slot::DriverAge, 16);
        let violation = validate_car(&young, today()).unwrap_err();
        assert_eq!(violation.slot, Slot::DriverAge);
        assert!(violation.message.contains("at least eighteen"));

        let bad_model = base.with(Slot::CarType, "spaceship");
        assert_eq!(violated_slot(validate_car(&bad_model, today())), Some(Slot::CarType));
    }

    #[test]
    fn test_first_violation_wins() {
        // Both the city and the age are wrong; the city is checked first.
        let slots = Slots::new()
            .with(Slot::PickUpCity, "Atlantis")
            .with(Slot::DriverAge, 12);
        assert_eq!(violated_slot(validate_car(&slots, today())), Some(Slot::PickUpCity));
    }

    #[test]
    fn test_flight_order_attributed_to_return_date() {
        let slots = Slots::new()
            .with(Slot::LeaveDate, date(2024, 5, 1))
            .with(Slot::ReturnDate, date(2024, 4, 30));
        let violation = validate_flight(&slots, today()).unwrap_err();
        assert_eq!(violation.slot, Slot::ReturnDate);
        assert!(violation.message.contains("must be after"));
    }

    #[test]
    fn test_flight_country_and_party() {
        let slots = Slots::new().with(Slot::ArrivalCountry, "Narnia");
        assert_eq!(violated_slot(validate_flight(&slots, today())), Some(Slot::ArrivalCountry));

        let slots = Slots::new().with(Slot::ArrivalCountry, "australia").with(Slot::Amount, 0);
        assert_eq!(violated_slot(validate_flight(&slots, today())), Some(Slot::Amount));
    }
}
