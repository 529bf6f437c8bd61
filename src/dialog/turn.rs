//! Inbound turn types

use super::field::Slots;
use super::reservation::ReservationKind;
use super::session::SessionState;
use chrono::NaiveDate;
use serde::Deserialize;

/// Whether the user answered the pending confirm prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ConfirmationStatus {
    #[default]
    None,
    Denied,
    Confirmed,
}

/// What the caller expects from this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum InvocationPhase {
    /// Validate slots and drive the dialog
    #[serde(rename = "DialogCodeHook")]
    ValidateFields,
    /// The caller has collected and confirmed everything; place the booking
    #[serde(rename = "FulfillmentCodeHook")]
    ConfirmAndFulfill,
}

/// One inbound turn for a booking intent
#[derive(Debug, Clone)]
pub struct Turn {
    pub kind: ReservationKind,
    /// Intent name as received, echoed back on elicit and confirm actions
    pub intent_name: String,
    pub slots: Slots,
    pub confirmation_status: ConfirmationStatus,
    pub phase: InvocationPhase,
    pub session: SessionState,
}

#[cfg(test)]
impl Turn {
    pub fn new(kind: ReservationKind, slots: Slots) -> Self {
        Self {
            kind,
            intent_name: kind.intent_name().to_string(),
            slots,
            confirmation_status: ConfirmationStatus::None,
            phase: InvocationPhase::ValidateFields,
            session: SessionState::new(),
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: ConfirmationStatus) -> Self {
        self.confirmation_status = status;
        self
    }

    #[must_use]
    pub fn with_phase(mut self, phase: InvocationPhase) -> Self {
        self.phase = phase;
        self
    }

    #[must_use]
    pub fn with_session(mut self, session: SessionState) -> Self {
        self.session = session;
        self
    }
}

/// Per-turn evaluation context (immutable)
#[derive(Debug, Clone, Copy)]
pub struct DialogContext {
    /// The evaluation day; date rules compare against it
    pub today: NaiveDate,
}

impl DialogContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}
