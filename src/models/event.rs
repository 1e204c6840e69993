//! Event model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recommended external activity, as returned by the events-by-user
/// endpoint. Read-only; one event at a time may be selected for the
/// detail modal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "super::opaque_id")]
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(rename = "ticketPrice")]
    pub ticket_price: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl Event {
    /// Zero-priced events render as "Free"
    pub fn is_free(&self) -> bool {
        self.ticket_price == 0.0
    }
}
