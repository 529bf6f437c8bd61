//! HTTP hook server for the booking dialog

mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

/// Source of the evaluation day for date rules
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The current calendar day in a fixed timezone
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    pub timezone: Tz,
}

impl Clock for ZonedClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

/// Always reports the same day
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }
}
