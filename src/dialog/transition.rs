//! Pure turn transition function
//!
//! The dialog's position (eliciting, awaiting confirmation, confirmed,
//! denied, fulfilled) is not stored anywhere; it is reconstructed each turn
//! from the confirmation status, the confirmation context in the session,
//! the slot values and the invocation phase.

use super::action::{FulfillmentState, TransitionResult};
use super::field::Slots;
use super::intent::{profile, IntentProfile};
use super::reservation::Reservation;
use super::session::{ConfirmationContext, SessionState};
use super::turn::{ConfirmationStatus, DialogContext, InvocationPhase, Turn};
use super::validate::validate;

const MISSING_DETAILS: &str =
    "I could not place your reservation because some details are missing.";

/// Decide the next action for one turn.
///
/// Pure: the same turn and context always produce the same result.
pub fn transition(turn: Turn, ctx: &DialogContext) -> TransitionResult {
    let Turn {
        kind,
        intent_name,
        mut slots,
        confirmation_status,
        phase,
        mut session,
    } = turn;
    let profile = profile(kind);

    // The draft is recorded before validation so a partial booking survives.
    let draft = Reservation::from_slots(kind, &slots);
    session.current_reservation = Some(draft.clone());

    let validation = validate(kind, &slots, ctx.today);

    if phase == InvocationPhase::ConfirmAndFulfill {
        // An invalid draft is never booked.
        if let Err(violation) = validation {
            session.confirmation_context = None;
            return TransitionResult::close(
                kind,
                session,
                FulfillmentState::Failed,
                violation.message,
            );
        }
        return fulfill(profile, session, draft);
    }

    if let Err(violation) = validation {
        slots.clear(violation.slot);
        return TransitionResult::elicit_slot(
            kind,
            session,
            intent_name,
            slots,
            violation.slot,
            violation.message,
        );
    }

    let was_auto_populating = session.is_auto_populating();

    match confirmation_status {
        ConfirmationStatus::Denied => {
            session.confirmation_context = None;
            session.current_reservation = None;

            if was_auto_populating {
                // Rejecting a proposal restarts the whole form.
                return TransitionResult::elicit_slot(
                    kind,
                    session,
                    intent_name,
                    Slots::new(),
                    profile.primary_slot,
                    profile.primary_prompt,
                );
            }
            TransitionResult::delegate(kind, session, slots)
        }

        ConfirmationStatus::None => {
            if slots.is_empty() || was_auto_populating {
                let proposal = session
                    .last_confirmed_reservation
                    .as_ref()
                    .and_then(|prior| profile.propose(prior));
                if let Some(proposal) = proposal {
                    session.confirmation_context = Some(ConfirmationContext::AutoPopulate);
                    return TransitionResult::confirm_intent(
                        kind,
                        session,
                        intent_name,
                        proposal.slots,
                        proposal.message,
                    );
                }
            }
            // Nothing to propose; drop any stale marker.
            session.confirmation_context = None;
            TransitionResult::delegate(kind, session, slots)
        }

        ConfirmationStatus::Confirmed => {
            session.confirmation_context = None;

            if was_auto_populating {
                if let Some((slot, prompt)) = profile.next_required(&slots) {
                    return TransitionResult::elicit_slot(
                        kind,
                        session,
                        intent_name,
                        slots,
                        slot,
                        prompt,
                    );
                }
            }

            if draft.is_complete() {
                fulfill(profile, session, draft)
            } else {
                TransitionResult::delegate(kind, session, slots)
            }
        }
    }
}

/// Place the booking if every slot is filled.
///
/// On success the draft becomes the last confirmed reservation.
fn fulfill(
    profile: &IntentProfile,
    mut session: SessionState,
    draft: Reservation,
) -> TransitionResult {
    session.confirmation_context = None;

    if !draft.is_complete() {
        return TransitionResult::close(
            profile.kind,
            session,
            FulfillmentState::Failed,
            MISSING_DETAILS,
        );
    }

    session.current_reservation = None;
    session.last_confirmed_reservation = Some(draft);
    TransitionResult::close(
        profile.kind,
        session,
        FulfillmentState::Fulfilled,
        profile.fulfilled_message,
    )
}
