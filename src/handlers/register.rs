//! Registration page handlers
//!
//! The GET handler loads the interest catalog and renders the blank form.
//! The POST handler validates, submits to the backend, and either redirects
//! to the new dashboard or re-renders the form with the user's input intact.

use axum::extract::{RawForm, State};
use axum::response::{IntoResponse, Redirect, Response};
use tracing::info;

use crate::controllers::registration::{RegistrationForm, ValidationErrors};
use crate::models::Interest;
use crate::utils::logging::{log_backend_error, log_page_view};
use crate::views::RegisterPage;

use super::AppContext;

const CATALOG_FAILED: &str = "Failed to load interests. Please try again.";
const SUBMIT_FAILED: &str = "There was an error during registration. Please try again.";

/// `GET /register`
pub async fn show(State(context): State<AppContext>) -> RegisterPage {
    log_page_view("/register", None);

    let (catalog, notice) = load_catalog(&context).await;
    RegisterPage::new(
        &catalog,
        &RegistrationForm::default(),
        ValidationErrors::default(),
        notice,
    )
}

/// `POST /register`
///
/// The interest multi-select submits repeated `interests` keys, which the
/// form extractor cannot collect into a list, so the body is decoded from
/// the raw urlencoded pairs instead.
pub async fn submit(State(context): State<AppContext>, RawForm(body): RawForm) -> Response {
    let form = RegistrationForm::from_pairs(url::form_urlencoded::parse(&body));

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            let (catalog, notice) = load_catalog(&context).await;
            return RegisterPage::new(&catalog, &form, errors, notice).into_response();
        }
    };

    match context.backend.create_user(&payload).await {
        Ok(user_id) => {
            info!(user_id = %user_id, "Registration successful");
            Redirect::to(&format!("/dashboard/{}?registered=1", user_id)).into_response()
        }
        Err(e) => {
            log_backend_error("/api/users/", &e.to_string());
            let (catalog, _) = load_catalog(&context).await;
            RegisterPage::new(
                &catalog,
                &form,
                ValidationErrors::default(),
                Some(SUBMIT_FAILED.to_string()),
            )
            .into_response()
        }
    }
}

/// Fetch the interest catalog; a failure leaves the form usable with an
/// empty selection list and a visible notice.
async fn load_catalog(context: &AppContext) -> (Vec<Interest>, Option<String>) {
    match context.backend.list_interests().await {
        Ok(catalog) => (catalog, None),
        Err(e) => {
            log_backend_error("/api/interests", &e.to_string());
            (Vec::new(), Some(CATALOG_FAILED.to_string()))
        }
    }
}
