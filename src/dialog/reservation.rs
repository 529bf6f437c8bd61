//! Draft and confirmed reservations
//!
//! A reservation is built from whatever slots are filled on a turn, so every
//! field is optional. The JSON form is the session snapshot format.

use super::field::{Slot, SlotValue, Slots};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which booking a reservation (and its intent) is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationKind {
    Hotel,
    Car,
    Flight,
}

impl ReservationKind {
    /// Slots of this kind in declaration order
    pub fn slots(self) -> &'static [Slot] {
        match self {
            ReservationKind::Hotel => &[
                Slot::Location,
                Slot::CheckInDate,
                Slot::Nights,
                Slot::RoomType,
            ],
            ReservationKind::Car => &[
                Slot::PickUpCity,
                Slot::PickUpDate,
                Slot::ReturnDate,
                Slot::DriverAge,
                Slot::CarType,
            ],
            ReservationKind::Flight => &[
                Slot::ArrivalCountry,
                Slot::ArrivalCity,
                Slot::LeaveDate,
                Slot::ReturnDate,
                Slot::CabinType,
                Slot::Amount,
            ],
        }
    }

    pub fn has_slot(self, slot: Slot) -> bool {
        self.slots().contains(&slot)
    }

    pub fn intent_name(self) -> &'static str {
        match self {
            ReservationKind::Hotel => "BookHotel",
            ReservationKind::Car => "BookCar",
            ReservationKind::Flight => "BookFlight",
        }
    }

    pub fn from_intent_name(name: &str) -> Option<Self> {
        [
            ReservationKind::Hotel,
            ReservationKind::Car,
            ReservationKind::Flight,
        ]
        .into_iter()
        .find(|kind| kind.intent_name() == name)
    }
}

impl fmt::Display for ReservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReservationKind::Hotel => "Hotel",
            ReservationKind::Car => "Car",
            ReservationKind::Flight => "Flight",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HotelReservation {
    pub location: Option<SlotValue>,
    pub room_type: Option<SlotValue>,
    pub check_in_date: Option<SlotValue>,
    pub nights: Option<SlotValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CarReservation {
    pub pick_up_city: Option<SlotValue>,
    pub pick_up_date: Option<SlotValue>,
    pub return_date: Option<SlotValue>,
    pub driver_age: Option<SlotValue>,
    pub car_type: Option<SlotValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlightReservation {
    pub arrival_country: Option<SlotValue>,
    pub arrival_city: Option<SlotValue>,
    pub leave_date: Option<SlotValue>,
    pub return_date: Option<SlotValue>,
    pub cabin_type: Option<SlotValue>,
    pub amount: Option<SlotValue>,
}

/// A reservation of any kind, tagged by `ReservationType` in JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "ReservationType")]
pub enum Reservation {
    Hotel(HotelReservation),
    Car(CarReservation),
    Flight(FlightReservation),
}

impl Reservation {
    /// Build the draft for `kind` from the slots filled this turn.
    ///
    /// Slots that belong to other kinds are ignored.
    pub fn from_slots(kind: ReservationKind, slots: &Slots) -> Self {
        let take = |slot: Slot| slots.get(slot).cloned();
        match kind {
            ReservationKind::Hotel => Reservation::Hotel(HotelReservation {
                location: take(Slot::Location),
                room_type: take(Slot::RoomType),
                check_in_date: take(Slot::CheckInDate),
                nights: take(Slot::Nights),
            }),
            ReservationKind::Car => Reservation::Car(CarReservation {
                pick_up_city: take(Slot::PickUpCity),
                pick_up_date: take(Slot::PickUpDate),
                return_date: take(Slot::ReturnDate),
                driver_age: take(Slot::DriverAge),
                car_type: take(Slot::CarType),
            }),
            ReservationKind::Flight => Reservation::Flight(FlightReservation {
                arrival_country: take(Slot::ArrivalCountry),
                arrival_city: take(Slot::ArrivalCity),
                leave_date: take(Slot::LeaveDate),
                return_date: take(Slot::ReturnDate),
                cabin_type: take(Slot::CabinType),
                amount: take(Slot::Amount),
            }),
        }
    }

    pub fn kind(&self) -> ReservationKind {
        match self {
            Reservation::Hotel(_) => ReservationKind::Hotel,
            Reservation::Car(_) => ReservationKind::Car,
            Reservation::Flight(_) => ReservationKind::Flight,
        }
    }

    /// Value of one of this reservation's slots
    pub fn get(&self, slot: Slot) -> Option<&SlotValue> {
        let field = match (self, slot) {
            (Reservation::Hotel(r), Slot::Location) => &r.location,
            (Reservation::Hotel(r), Slot::RoomType) => &r.room_type,
            (Reservation::Hotel(r), Slot::CheckInDate) => &r.check_in_date,
            (Reservation::Hotel(r), Slot::Nights) => &r.nights,
            (Reservation::Car(r), Slot::PickUpCity) => &r.pick_up_city,
            (Reservation::Car(r), Slot::PickUpDate) => &r.pick_up_date,
            (Reservation::Car(r), Slot::ReturnDate) => &r.return_date,
            (Reservation::Car(r), Slot::DriverAge) => &r.driver_age,
            (Reservation::Car(r), Slot::CarType) => &r.car_type,
            (Reservation::Flight(r), Slot::ArrivalCountry) => &r.arrival_country,
            (Reservation::Flight(r), Slot::ArrivalCity) => &r.arrival_city,
            (Reservation::Flight(r), Slot::LeaveDate) => &r.leave_date,
            (Reservation::Flight(r), Slot::ReturnDate) => &r.return_date,
            (Reservation::Flight(r), Slot::CabinType) => &r.cabin_type,
            (Reservation::Flight(r), Slot::Amount) => &r.amount,
            _ => return None,
        };
        field.as_ref()
    }

    #[cfg(test)]
    pub fn to_slots(&self) -> Slots {
        let mut slots = Slots::new();
        for &slot in self.kind().slots() {
            slots.set(slot, self.get(slot).cloned());
        }
        slots
    }

    /// The same reservation with every value coerced to its slot's type
    #[must_use]
    pub fn retyped(&self) -> Self {
        let kind = self.kind();
        let mut slots = Slots::new();
        for &slot in kind.slots() {
            slots.set(slot, self.get(slot).cloned().map(|value| value.retyped(slot)));
        }
        Reservation::from_slots(kind, &slots)
    }

    /// Every slot of the kind is filled
    pub fn is_complete(&self) -> bool {
        self.kind().slots().iter().all(|slot| self.get(*slot).is_some())
    }
}
