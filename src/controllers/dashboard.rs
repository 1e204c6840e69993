//! Dashboard page controller
//!
//! Given a route-supplied user id, the controller moves through
//! `Idle -> Loading -> Ready | Errored`. Both backend fetches (user detail
//! and recommended events) are issued together and joined all-or-nothing:
//! either one failing fails the whole load. The selected-event reference is
//! an orthogonal sub-state of `Ready`, cleared on modal close and replaced
//! wholesale when a different event is selected.

use tracing::{debug, info, warn};

use crate::models::{Event, UserProfile};
use crate::services::BackendClient;
use crate::utils::errors::BackendError;

/// Dashboard page state; one tagged value instead of separate
/// loading/data/error flags so illegal combinations cannot exist
#[derive(Debug)]
pub enum DashboardState {
    /// No identifier supplied, nothing fetched
    Idle,
    /// Both fetches in flight
    Loading,
    /// Both fetches resolved
    Ready(DashboardData),
    /// Either fetch failed; terminal for this visit
    Errored(DashboardError),
}

/// Failure kinds kept distinct: an unknown user id is not the same thing
/// as an unreachable backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    UserNotFound,
    Unavailable(String),
}

/// Everything a ready dashboard renders
#[derive(Debug)]
pub struct DashboardData {
    pub profile: UserProfile,
    pub events: Vec<Event>,
    selected_event: Option<String>,
}

impl DashboardState {
    /// State name for structured logging
    pub fn name(&self) -> &'static str {
        match self {
            DashboardState::Idle => "idle",
            DashboardState::Loading => "loading",
            DashboardState::Ready(_) => "ready",
            DashboardState::Errored(_) => "errored",
        }
    }
}

impl DashboardData {
    pub fn new(profile: UserProfile, events: Vec<Event>) -> Self {
        Self {
            profile,
            events,
            selected_event: None,
        }
    }

    /// Select an event for the detail modal. Last write wins; selecting a
    /// new event replaces the prior selection without an explicit close.
    /// Ids not present in the event list are ignored.
    pub fn select_event(&mut self, event_id: &str) {
        if self.events.iter().any(|e| e.id == event_id) {
            self.selected_event = Some(event_id.to_string());
        } else {
            debug!(event_id = %event_id, "Ignoring selection of unknown event");
        }
    }

    /// Close the detail modal
    pub fn close_modal(&mut self) {
        self.selected_event = None;
    }

    /// The event currently shown in the modal, if any
    pub fn selected(&self) -> Option<&Event> {
        let id = self.selected_event.as_deref()?;
        self.events.iter().find(|e| e.id == id)
    }
}

/// Drives the dashboard state machine for one page visit
#[derive(Debug)]
pub struct DashboardController<'a> {
    client: &'a BackendClient,
    state: DashboardState,
}

impl<'a> DashboardController<'a> {
    pub fn new(client: &'a BackendClient) -> Self {
        Self {
            client,
            state: DashboardState::Idle,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn into_state(self) -> DashboardState {
        self.state
    }

    /// Run the fetch/join cycle. With no identifier the controller stays
    /// idle and issues no request. Otherwise both fetches run concurrently
    /// and the controller waits for both before leaving `Loading`.
    pub async fn load(&mut self, user_id: Option<&str>) -> &DashboardState {
        let Some(user_id) = user_id else {
            self.state = DashboardState::Idle;
            return &self.state;
        };

        self.state = DashboardState::Loading;
        debug!(user_id = %user_id, state = self.state.name(), "Dashboard load started");

        let (detail, events) = tokio::join!(
            self.client.user_detail(user_id),
            self.client.events_for_user(user_id),
        );

        self.state = match (detail, events) {
            (Ok(profile), Ok(events)) => {
                info!(
                    user_id = %user_id,
                    interests = profile.interests.len(),
                    members = profile.subgroup_members.len(),
                    events = events.len(),
                    "Dashboard ready"
                );
                DashboardState::Ready(DashboardData::new(profile, events))
            }
            (detail, events) => {
                let error = join_error(detail.err(), events.err());
                warn!(user_id = %user_id, error = ?error, "Dashboard load failed");
                DashboardState::Errored(error)
            }
        };

        &self.state
    }
}

/// Collapse the two fetch outcomes into a single failure kind. A 404 from
/// either endpoint means the user does not exist; anything else is a
/// transport or decoding problem.
fn join_error(detail: Option<BackendError>, events: Option<BackendError>) -> DashboardError {
    let errors: Vec<BackendError> = detail.into_iter().chain(events).collect();

    if errors.iter().any(BackendError::is_not_found) {
        DashboardError::UserNotFound
    } else {
        let reason = errors
            .first()
            .map(ToString::to_string)
            .unwrap_or_else(|| "unknown error".to_string());
        DashboardError::Unavailable(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_event(id: &str) -> Event {
        Event {
            id: id.to_string(),
            name: format!("Event {}", id),
            location: "Somewhere".to_string(),
            ticket_price: 0.0,
            date: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
            tags: vec![],
            description: String::new(),
        }
    }

    fn sample_data() -> DashboardData {
        let profile: UserProfile = serde_json::from_str(
            r#"{
                "id": "1", "name": "Jane", "age": 28, "city": "NYC",
                "occupation": "Engineer", "interests": [],
                "group": {"name": null}, "subgroup": {"name": null},
                "subgroupMembers": []
            }"#,
        )
        .unwrap();
        DashboardData::new(profile, vec![sample_event("a"), sample_event("b")])
    }

    #[test]
    fn test_select_then_close_clears_selection() {
        let mut data = sample_data();
        data.select_event("a");
        assert_eq!(data.selected().unwrap().id, "a");

        data.close_modal();
        assert!(data.selected().is_none());
    }

    #[test]
    fn test_selecting_second_event_replaces_first() {
        let mut data = sample_data();
        data.select_event("a");
        data.select_event("b");
        assert_eq!(data.selected().unwrap().id, "b");
    }

    #[test]
    fn test_unknown_event_id_is_ignored() {
        let mut data = sample_data();
        data.select_event("missing");
        assert!(data.selected().is_none());

        data.select_event("a");
        data.select_event("missing");
        assert_eq!(data.selected().unwrap().id, "a");
    }

    #[test]
    fn test_not_found_takes_priority_over_transport_error() {
        let error = join_error(
            Some(BackendError::Timeout),
            Some(BackendError::NotFound("user M1".to_string())),
        );
        assert_eq!(error, DashboardError::UserNotFound);
    }

    #[test]
    fn test_transport_errors_map_to_unavailable() {
        let error = join_error(Some(BackendError::ServiceUnavailable), None);
        assert!(matches!(error, DashboardError::Unavailable(_)));
    }
}
