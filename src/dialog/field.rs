//! Slot names and values

use super::dates::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named slot of one of the booking intents.
///
/// Variant names are the wire names of the slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    // Hotel
    Location,
    CheckInDate,
    Nights,
    RoomType,
    // Car
    PickUpCity,
    PickUpDate,
    ReturnDate,
    DriverAge,
    CarType,
    // Flight
    ArrivalCountry,
    ArrivalCity,
    LeaveDate,
    CabinType,
    Amount,
}

/// How a slot's raw text is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotType {
    Text,
    Date,
    Integer,
}

impl Slot {
    pub const ALL: [Slot; 14] = [
        Slot::Location,
        Slot::CheckInDate,
        Slot::Nights,
        Slot::RoomType,
        Slot::PickUpCity,
        Slot::PickUpDate,
        Slot::ReturnDate,
        Slot::DriverAge,
        Slot::CarType,
        Slot::ArrivalCountry,
        Slot::ArrivalCity,
        Slot::LeaveDate,
        Slot::CabinType,
        Slot::Amount,
    ];

    /// Wire name of the slot
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Location => "Location",
            Slot::CheckInDate => "CheckInDate",
            Slot::Nights => "Nights",
            Slot::RoomType => "RoomType",
            Slot::PickUpCity => "PickUpCity",
            Slot::PickUpDate => "PickUpDate",
            Slot::ReturnDate => "ReturnDate",
            Slot::DriverAge => "DriverAge",
            Slot::CarType => "CarType",
            Slot::ArrivalCountry => "ArrivalCountry",
            Slot::ArrivalCity => "ArrivalCity",
            Slot::LeaveDate => "LeaveDate",
            Slot::CabinType => "CabinType",
            Slot::Amount => "Amount",
        }
    }

    pub fn slot_type(self) -> SlotType {
        match self {
            Slot::CheckInDate | Slot::PickUpDate | Slot::ReturnDate | Slot::LeaveDate => {
                SlotType::Date
            }
            Slot::Nights | Slot::DriverAge | Slot::Amount => SlotType::Integer,
            _ => SlotType::Text,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a slot name no intent defines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown slot {0}")]
pub struct UnknownSlotName(pub String);

impl FromStr for Slot {
    type Err = UnknownSlotName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| UnknownSlotName(s.to_string()))
    }
}

/// A present slot value.
///
/// Text that failed to parse into its slot's type stays `Text` so the
/// validators can report it. Absence is modelled by `Option<SlotValue>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    Integer(i64),
    Date(NaiveDate),
    Text(String),
}

impl SlotValue {
    /// Interpret raw slot text according to the slot's type.
    ///
    /// Blank text is absent.
    pub fn parse(slot: Slot, raw: &str) -> Option<SlotValue> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let value = match slot.slot_type() {
            SlotType::Date => parse_date(trimmed).map(SlotValue::Date),
            SlotType::Integer => trimmed.parse().ok().map(SlotValue::Integer),
            SlotType::Text => None,
        };
        Some(value.unwrap_or_else(|| SlotValue::Text(trimmed.to_string())))
    }

    /// Coerce a value decoded without its slot back to the slot's type.
    ///
    /// Untagged decoding reads any ISO-date-shaped string as a date, so text
    /// slots can come back as `Date`. Mismatched values become their `Display`
    /// text, which is the text they were stored from.
    #[must_use]
    pub fn retyped(self, slot: Slot) -> SlotValue {
        match (slot.slot_type(), self) {
            (SlotType::Date, value @ SlotValue::Date(_))
            | (SlotType::Integer, value @ SlotValue::Integer(_))
            | (_, value @ SlotValue::Text(_)) => value,
            (_, other) => SlotValue::Text(other.to_string()),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            SlotValue::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SlotValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Integer(n) => write!(f, "{n}"),
            SlotValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            SlotValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for SlotValue {
    fn from(text: &str) -> Self {
        SlotValue::Text(text.to_string())
    }
}

impl From<String> for SlotValue {
    fn from(text: String) -> Self {
        SlotValue::Text(text)
    }
}

impl From<i64> for SlotValue {
    fn from(n: i64) -> Self {
        SlotValue::Integer(n)
    }
}

impl From<i32> for SlotValue {
    fn from(n: i32) -> Self {
        SlotValue::Integer(i64::from(n))
    }
}

impl From<NaiveDate> for SlotValue {
    fn from(date: NaiveDate) -> Self {
        SlotValue::Date(date)
    }
}

/// The slot values present on a turn. Missing keys are absent slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots {
    values: BTreeMap<Slot, SlotValue>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, slot: Slot, value: impl Into<SlotValue>) -> Self {
        self.values.insert(slot, value.into());
        self
    }

    pub fn get(&self, slot: Slot) -> Option<&SlotValue> {
        self.values.get(&slot)
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.values.contains_key(&slot)
    }

    /// Set or clear a slot
    pub fn set(&mut self, slot: Slot, value: Option<SlotValue>) {
        match value {
            Some(value) => {
                self.values.insert(slot, value);
            }
            None => {
                self.values.remove(&slot);
            }
        }
    }

    pub fn clear(&mut self, slot: Slot) {
        self.values.remove(&slot);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &SlotValue)> {
        self.values.iter().map(|(slot, value)| (*slot, value))
    }
}
