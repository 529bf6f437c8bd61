//! Routing of raw inbound turns to the booking intents

use super::action::{DialogAction, TransitionResult};
use super::field::{Slot, SlotValue, Slots};
use super::reservation::ReservationKind;
use super::session::SessionState;
use super::transition::transition;
use super::turn::{ConfirmationStatus, DialogContext, InvocationPhase, Turn};
use std::collections::BTreeMap;
use thiserror::Error;

/// Caller errors; user mistakes are reported through elicit actions instead
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialogError {
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),
    #[error("Slot {slot} does not belong to intent {intent}")]
    UnknownSlot { intent: String, slot: String },
}

/// A turn as received, before slot values are typed
#[derive(Debug, Clone)]
pub struct TurnRequest {
    pub intent_name: String,
    pub slots: BTreeMap<String, Option<String>>,
    pub confirmation_status: ConfirmationStatus,
    pub phase: InvocationPhase,
    pub session: SessionState,
}

/// Route a turn to its intent and run the transition
pub fn dispatch(request: TurnRequest, ctx: &DialogContext) -> Result<TransitionResult, DialogError> {
    let TurnRequest {
        intent_name,
        slots: raw_slots,
        confirmation_status,
        phase,
        session,
    } = request;

    let kind = ReservationKind::from_intent_name(&intent_name)
        .ok_or_else(|| DialogError::UnsupportedIntent(intent_name.clone()))?;
    let slots = parse_slots(kind, &intent_name, raw_slots)?;

    tracing::debug!(
        intent = %intent_name,
        status = ?confirmation_status,
        phase = ?phase,
        filled = slots.iter().count(),
        "Dispatching turn"
    );

    let turn = Turn {
        kind,
        intent_name,
        slots,
        confirmation_status,
        phase,
        session,
    };
    let result = transition(turn, ctx);
    log_result(&result);
    Ok(result)
}

fn parse_slots(
    kind: ReservationKind,
    intent_name: &str,
    raw_slots: BTreeMap<String, Option<String>>,
) -> Result<Slots, DialogError> {
    let mut slots = Slots::new();
    for (name, raw) in raw_slots {
        let slot = name
            .parse::<Slot>()
            .ok()
            .filter(|slot| kind.has_slot(*slot))
            .ok_or_else(|| DialogError::UnknownSlot {
                intent: intent_name.to_string(),
                slot: name.clone(),
            })?;
        slots.set(slot, raw.and_then(|raw| SlotValue::parse(slot, &raw)));
    }
    Ok(slots)
}

fn log_result(result: &TransitionResult) {
    match &result.action {
        DialogAction::ElicitSlot { slot_to_elicit, .. } => {
            tracing::info!(kind = %result.kind, slot = %slot_to_elicit, "Eliciting slot");
        }
        DialogAction::ConfirmIntent { .. } => {
            tracing::info!(
                kind = %result.kind,
                auto_populate = result.session.is_auto_populating(),
                "Requesting confirmation"
            );
        }
        DialogAction::Close {
            fulfillment_state, ..
        } => {
            tracing::info!(
                kind = %result.kind,
                outcome = fulfillment_state.as_str(),
                reservation = ?result.session.last_confirmed_reservation,
                "Closing intent"
            );
        }
        DialogAction::Delegate { .. } => {
            tracing::info!(kind = %result.kind, "Delegating to default policy");
        }
    }
}
