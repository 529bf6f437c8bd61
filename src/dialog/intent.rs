//! Per-intent configuration of the shared confirmation protocol

use super::dates::add_days;
use super::field::{Slot, Slots};
use super::reservation::{Reservation, ReservationKind};

/// Values proposed from a prior reservation, with the confirm prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub slots: Slots,
    pub message: String,
}

/// Builds a proposal from a prior reservation, or `None` when the prior one
/// is of the wrong kind or lacks a value the proposal needs
pub type AutoPopulateRule = fn(&Reservation) -> Option<Proposal>;

/// What distinguishes one booking intent from another in the protocol
pub struct IntentProfile {
    pub kind: ReservationKind,
    /// Slot re-elicited after the user rejects a proposal
    pub primary_slot: Slot,
    pub primary_prompt: &'static str,
    /// Slots a proposal leaves open, asked for in order once it is accepted
    pub required_after_confirm: &'static [(Slot, &'static str)],
    /// Tried in order against the last confirmed reservation
    pub auto_populate: &'static [AutoPopulateRule],
    pub fulfilled_message: &'static str,
}

impl IntentProfile {
    /// First proposal any rule derives from `prior`
    pub fn propose(&self, prior: &Reservation) -> Option<Proposal> {
        self.auto_populate.iter().find_map(|rule| rule(prior))
    }

    /// First post-confirmation slot still missing from `slots`
    pub fn next_required(&self, slots: &Slots) -> Option<(Slot, &'static str)> {
        self.required_after_confirm
            .iter()
            .copied()
            .find(|(slot, _)| !slots.contains(*slot))
    }
}

static HOTEL: IntentProfile = IntentProfile {
    kind: ReservationKind::Hotel,
    primary_slot: Slot::Location,
    primary_prompt: "Where would you like to stay?",
    required_after_confirm: &[
        (Slot::CheckInDate, "When would you like to check in?"),
        (Slot::Nights, "How many nights would you like to stay for?"),
    ],
    auto_populate: &[hotel_from_hotel],
    fulfilled_message: "Thanks, I have placed your reservation.   Please let me know if you would like to book a car rental, or another hotel.",
};

static CAR: IntentProfile = IntentProfile {
    kind: ReservationKind::Car,
    primary_slot: Slot::PickUpCity,
    primary_prompt: "Where would you like to make your car reservation?",
    required_after_confirm: &[
        (Slot::DriverAge, "How old is the driver of this car rental?"),
        (
            Slot::CarType,
            "What type of car would you like? Popular models are economy, midsize, and luxury.",
        ),
    ],
    auto_populate: &[car_from_hotel_stay, car_from_car],
    fulfilled_message: "Thanks, I have placed your reservation.",
};

static FLIGHT: IntentProfile = IntentProfile {
    kind: ReservationKind::Flight,
    primary_slot: Slot::ArrivalCountry,
    primary_prompt: "Where would you like to travel to?",
    required_after_confirm: &[(Slot::Amount, "How many guests?")],
    auto_populate: &[flight_from_flight],
    fulfilled_message: "Thanks, I have placed your reservation.",
};

pub fn profile(kind: ReservationKind) -> &'static IntentProfile {
    match kind {
        ReservationKind::Hotel => &HOTEL,
        ReservationKind::Car => &CAR,
        ReservationKind::Flight => &FLIGHT,
    }
}

/// A car for the length of the last hotel stay
fn car_from_hotel_stay(prior: &Reservation) -> Option<Proposal> {
    let Reservation::Hotel(stay) = prior else {
        return None;
    };
    let location = stay.location.clone()?;
    let check_in = stay.check_in_date.as_ref()?.as_date()?;
    let nights = stay.nights.as_ref()?.as_integer()?;
    let return_date = add_days(check_in, nights)?;

    Some(Proposal {
        message: format!(
            "Is this car rental for your {nights} night stay in {location} on {check_in}?"
        ),
        slots: Slots::new()
            .with(Slot::PickUpCity, location)
            .with(Slot::PickUpDate, check_in)
            .with(Slot::ReturnDate, return_date),
    })
}

fn car_from_car(prior: &Reservation) -> Option<Proposal> {
    let Reservation::Car(rental) = prior else {
        return None;
    };
    let city = rental.pick_up_city.clone()?;
    let car_type = rental.car_type.clone()?;

    Some(Proposal {
        message: format!("Would you like to rent another {car_type} car in {city}?"),
        slots: Slots::new()
            .with(Slot::PickUpCity, city)
            .with(Slot::CarType, car_type),
    })
}

fn hotel_from_hotel(prior: &Reservation) -> Option<Proposal> {
    let Reservation::Hotel(stay) = prior else {
        return None;
    };
    let location = stay.location.clone()?;
    let room_type = stay.room_type.clone()?;

    Some(Proposal {
        message: format!("Would you like to book another {room_type} room in {location}?"),
        slots: Slots::new()
            .with(Slot::Location, location)
            .with(Slot::RoomType, room_type),
    })
}

fn flight_from_flight(prior: &Reservation) -> Option<Proposal> {
    let Reservation::Flight(trip) = prior else {
        return None;
    };
    let country = trip.arrival_country.clone()?;
    let city = trip.arrival_city.clone()?;
    let cabin = trip.cabin_type.clone()?;

    Some(Proposal {
        message: format!("Would you like to fly {cabin} to {city}, {country} again?"),
        slots: Slots::new()
            .with(Slot::ArrivalCountry, country)
            .with(Slot::ArrivalCity, city)
            .with(Slot::CabinType, cabin),
    })
}
