//! Login page handlers

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use tracing::info;

use crate::controllers::login::LoginForm;
use crate::utils::logging::{log_backend_error, log_page_view};
use crate::views::LoginPage;

use super::AppContext;

const ID_NOT_FOUND: &str = "User ID not found. Please check and try again.";
const LOGIN_UNAVAILABLE: &str = "Could not reach the server. Please try again.";

/// `GET /login`
pub async fn show() -> LoginPage {
    log_page_view("/login", None);
    LoginPage {
        user_id: String::new(),
        error: None,
    }
}

/// `POST /login`
///
/// Navigates to the dashboard if and only if the backend confirms the id;
/// every other outcome re-renders the form with a visible error.
pub async fn submit(State(context): State<AppContext>, Form(form): Form<LoginForm>) -> Response {
    let user_id = match form.validate() {
        Ok(user_id) => user_id.to_string(),
        Err(message) => {
            return LoginPage {
                user_id: form.user_id.clone(),
                error: Some(message),
            }
            .into_response();
        }
    };

    match context.backend.check_login(&user_id).await {
        Ok(()) => {
            info!(user_id = %user_id, "Login check passed");
            Redirect::to(&format!("/dashboard/{}", user_id)).into_response()
        }
        Err(e) if e.is_not_found() => LoginPage {
            user_id,
            error: Some(ID_NOT_FOUND.to_string()),
        }
        .into_response(),
        Err(e) => {
            log_backend_error("/api/login/", &e.to_string());
            LoginPage {
                user_id,
                error: Some(LOGIN_UNAVAILABLE.to_string()),
            }
            .into_response()
        }
    }
}
