//! Outbound dialog actions produced by transitions

use super::field::{Slot, Slots};
use super::reservation::ReservationKind;
use super::session::SessionState;

/// Outcome reported by a close action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

impl FulfillmentState {
    pub fn as_str(self) -> &'static str {
        match self {
            FulfillmentState::Fulfilled => "Fulfilled",
            FulfillmentState::Failed => "Failed",
        }
    }
}

/// The next dialog step the caller should take
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// Ask the user for one slot
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: Slot,
        message: String,
    },

    /// Ask the user to confirm the intent with the given slots
    ConfirmIntent {
        intent_name: String,
        slots: Slots,
        message: String,
    },

    /// End the intent
    Close {
        fulfillment_state: FulfillmentState,
        message: String,
    },

    /// Let the caller's default policy choose the next step
    Delegate { slots: Slots },
}

impl DialogAction {
    /// Wire name of the action type
    pub fn type_name(&self) -> &'static str {
        match self {
            DialogAction::ElicitSlot { .. } => "ElicitSlot",
            DialogAction::ConfirmIntent { .. } => "ConfirmIntent",
            DialogAction::Close { .. } => "Close",
            DialogAction::Delegate { .. } => "Delegate",
        }
    }
}

/// Result of a turn: the new session state plus the action to take
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub kind: ReservationKind,
    pub session: SessionState,
    pub action: DialogAction,
}

impl TransitionResult {
    pub fn elicit_slot(
        kind: ReservationKind,
        session: SessionState,
        intent_name: impl Into<String>,
        slots: Slots,
        slot_to_elicit: Slot,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            session,
            action: DialogAction::ElicitSlot {
                intent_name: intent_name.into(),
                slots,
                slot_to_elicit,
                message: message.into(),
            },
        }
    }

    pub fn confirm_intent(
        kind: ReservationKind,
        session: SessionState,
        intent_name: impl Into<String>,
        slots: Slots,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            session,
            action: DialogAction::ConfirmIntent {
                intent_name: intent_name.into(),
                slots,
                message: message.into(),
            },
        }
    }

    pub fn close(
        kind: ReservationKind,
        session: SessionState,
        fulfillment_state: FulfillmentState,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            session,
            action: DialogAction::Close {
                fulfillment_state,
                message: message.into(),
            },
        }
    }

    pub fn delegate(kind: ReservationKind, session: SessionState, slots: Slots) -> Self {
        Self {
            kind,
            session,
            action: DialogAction::Delegate { slots },
        }
    }
}
