//! Welcome screen handler

use crate::utils::logging::log_page_view;
use crate::views::WelcomePage;

/// `GET /`
pub async fn show() -> WelcomePage {
    log_page_view("/", None);
    WelcomePage
}
