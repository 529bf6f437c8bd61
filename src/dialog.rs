//! Booking dialog engine
//!
//! Pure per-turn transitions: one inbound turn plus session state in, one
//! dialog action plus new session state out.

mod action;
pub mod dates;
mod field;
mod intent;
mod reservation;
mod router;
mod session;
pub(crate) mod transition;
mod turn;
pub mod validate;

#[cfg(test)]
mod proptests;

pub use action::{DialogAction, TransitionResult};
pub use field::Slots;
pub use router::{dispatch, DialogError, TurnRequest};
pub use session::SessionState;
pub use turn::{ConfirmationStatus, DialogContext, InvocationPhase};

#[allow(unused_imports)] // Public API re-exports
pub use {
    action::FulfillmentState,
    field::{Slot, SlotType, SlotValue},
    intent::{profile, IntentProfile, Proposal},
    reservation::{CarReservation, FlightReservation, HotelReservation, Reservation, ReservationKind},
    session::ConfirmationContext,
    transition::transition,
    turn::Turn,
    validate::Violation,
};
