//! Cross-turn session state
//!
//! Typed inside the engine; flattened to string attributes only at the
//! wire boundary.

use super::reservation::Reservation;
use std::collections::BTreeMap;

pub const CURRENT_RESERVATION: &str = "currentReservation";
pub const LAST_CONFIRMED_RESERVATION: &str = "lastConfirmedReservation";
pub const CONFIRMATION_CONTEXT: &str = "confirmationContext";

/// Why the pending confirm prompt was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationContext {
    /// The prompt proposes values copied from the last confirmed reservation
    AutoPopulate,
}

impl ConfirmationContext {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfirmationContext::AutoPopulate => "AutoPopulate",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AutoPopulate" => Some(ConfirmationContext::AutoPopulate),
            _ => None,
        }
    }
}

/// State carried across the turns of one conversation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Draft of the reservation being collected by the active intent
    pub current_reservation: Option<Reservation>,
    /// The most recently fulfilled reservation, of any kind
    pub last_confirmed_reservation: Option<Reservation>,
    pub confirmation_context: Option<ConfirmationContext>,
    /// Attributes this engine does not own, passed through unchanged
    pub other: BTreeMap<String, String>,
}

impl SessionState {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_auto_populating(&self) -> bool {
        self.confirmation_context == Some(ConfirmationContext::AutoPopulate)
    }

    /// Decode wire session attributes.
    ///
    /// Snapshots that do not decode and unknown context tags are dropped with
    /// a warning rather than failing the turn.
    pub fn from_attributes(mut attributes: BTreeMap<String, String>) -> Self {
        let current_reservation = attributes
            .remove(CURRENT_RESERVATION)
            .and_then(|raw| decode_snapshot(CURRENT_RESERVATION, &raw));
        let last_confirmed_reservation = attributes
            .remove(LAST_CONFIRMED_RESERVATION)
            .and_then(|raw| decode_snapshot(LAST_CONFIRMED_RESERVATION, &raw));
        let confirmation_context = attributes.remove(CONFIRMATION_CONTEXT).and_then(|raw| {
            let context = ConfirmationContext::parse(&raw);
            if context.is_none() {
                tracing::warn!(value = %raw, "Dropping unknown confirmation context");
            }
            context
        });

        Self {
            current_reservation,
            last_confirmed_reservation,
            confirmation_context,
            other: attributes,
        }
    }

    /// Encode back into wire session attributes
    pub fn into_attributes(self) -> Result<BTreeMap<String, String>, serde_json::Error> {
        let mut attributes = self.other;
        if let Some(reservation) = &self.current_reservation {
            attributes.insert(
                CURRENT_RESERVATION.to_string(),
                serde_json::to_string(reservation)?,
            );
        }
        if let Some(reservation) = &self.last_confirmed_reservation {
            attributes.insert(
                LAST_CONFIRMED_RESERVATION.to_string(),
                serde_json::to_string(reservation)?,
            );
        }
        if let Some(context) = self.confirmation_context {
            attributes.insert(CONFIRMATION_CONTEXT.to_string(), context.as_str().to_string());
        }
        Ok(attributes)
    }
}

fn decode_snapshot(key: &str, raw: &str) -> Option<Reservation> {
    match serde_json::from_str::<Reservation>(raw) {
        Ok(reservation) => Some(reservation.retyped()),
        Err(e) => {
            tracing::warn!(key, error = %e, "Dropping undecodable reservation snapshot");
            None
        }
    }
}
