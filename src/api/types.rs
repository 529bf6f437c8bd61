//! Wire types for the dialog hook

use crate::dialog::{
    ConfirmationStatus, DialogAction, InvocationPhase, SessionState, Slots, TransitionResult,
    TurnRequest,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inbound hook event
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogEvent {
    pub current_intent: CurrentIntent,
    pub invocation_source: InvocationPhase,
    #[serde(default)]
    pub session_attributes: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub bot: Option<BotInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default)]
    pub slots: BTreeMap<String, Option<String>>,
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
}

#[derive(Debug, Deserialize)]
pub struct BotInfo {
    pub name: String,
}

impl DialogEvent {
    pub fn into_turn_request(self) -> TurnRequest {
        TurnRequest {
            intent_name: self.current_intent.name,
            slots: self.current_intent.slots,
            confirmation_status: self.current_intent.confirmation_status,
            phase: self.invocation_source,
            session: SessionState::from_attributes(self.session_attributes.unwrap_or_default()),
        }
    }
}

/// Outbound hook response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub session_attributes: BTreeMap<String, String>,
    pub dialog_action: WireAction,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAction {
    #[serde(rename = "type")]
    pub action_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<BTreeMap<String, Option<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_to_elicit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_state: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<WireMessage>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMessage {
    pub content_type: &'static str,
    pub content: String,
}

impl WireMessage {
    fn plain(content: String) -> Self {
        Self {
            content_type: "PlainText",
            content,
        }
    }
}

impl DialogResponse {
    pub fn from_result(result: TransitionResult) -> Result<Self, serde_json::Error> {
        let kind = result.kind;
        // Every slot of the intent is listed, null when absent
        let render = |slots: &Slots| -> BTreeMap<String, Option<String>> {
            kind.slots()
                .iter()
                .map(|&slot| {
                    (
                        slot.as_str().to_string(),
                        slots.get(slot).map(ToString::to_string),
                    )
                })
                .collect()
        };

        let action_type = result.action.type_name();
        let dialog_action = match result.action {
            DialogAction::ElicitSlot {
                intent_name,
                slots,
                slot_to_elicit,
                message,
            } => WireAction {
                action_type,
                intent_name: Some(intent_name),
                slots: Some(render(&slots)),
                slot_to_elicit: Some(slot_to_elicit.as_str().to_string()),
                fulfillment_state: None,
                message: Some(WireMessage::plain(message)),
            },
            DialogAction::ConfirmIntent {
                intent_name,
                slots,
                message,
            } => WireAction {
                action_type,
                intent_name: Some(intent_name),
                slots: Some(render(&slots)),
                slot_to_elicit: None,
                fulfillment_state: None,
                message: Some(WireMessage::plain(message)),
            },
            DialogAction::Close {
                fulfillment_state,
                message,
            } => WireAction {
                action_type,
                intent_name: None,
                slots: None,
                slot_to_elicit: None,
                fulfillment_state: Some(fulfillment_state.as_str()),
                message: Some(WireMessage::plain(message)),
            },
            DialogAction::Delegate { slots } => WireAction {
                action_type,
                intent_name: None,
                slots: Some(render(&slots)),
                slot_to_elicit: None,
                fulfillment_state: None,
                message: None,
            },
        };

        Ok(Self {
            session_attributes: result.session.into_attributes()?,
            dialog_action,
        })
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
