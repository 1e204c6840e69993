//! Dashboard page handler
//!
//! Runs the dashboard controller for the route-supplied user id and renders
//! the resulting state. The detail-modal selection lives in the `event`
//! query parameter, so selecting another event or closing the modal are
//! plain navigations and last-write-wins falls out of the URL.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::controllers::dashboard::{DashboardController, DashboardError, DashboardState};
use crate::utils::logging::log_page_view;
use crate::views::{DashboardPage, UnavailablePage, UserNotFoundPage};

use super::AppContext;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Selected event id; present while the detail modal is open
    pub event: Option<String>,
    /// Set by the post-registration redirect to show a success notice
    pub registered: Option<String>,
}

/// `GET /dashboard/{user_id}`
pub async fn show(
    State(context): State<AppContext>,
    Path(user_id): Path<String>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let mut controller = DashboardController::new(&context.backend);
    controller.load(Some(&user_id)).await;

    match controller.into_state() {
        DashboardState::Ready(mut data) => {
            if let Some(event_id) = query.event.as_deref() {
                data.select_event(event_id);
            }
            log_page_view("/dashboard", Some(&user_id));
            DashboardPage::new(&user_id, &data, query.registered.is_some()).into_response()
        }
        DashboardState::Errored(DashboardError::UserNotFound) => {
            (StatusCode::NOT_FOUND, UserNotFoundPage).into_response()
        }
        DashboardState::Errored(DashboardError::Unavailable(_)) => {
            (StatusCode::BAD_GATEWAY, UnavailablePage).into_response()
        }
        // The route always supplies an id, so the controller cannot stay
        // idle or loading here.
        DashboardState::Idle | DashboardState::Loading => Redirect::to("/").into_response(),
    }
}
