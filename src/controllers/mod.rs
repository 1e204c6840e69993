//! Page controllers
//!
//! One controller per screen, each a self-contained fetch/validate/render
//! cycle against the backend client. Controllers never share state; pages
//! are composed only by navigation.

pub mod dashboard;
pub mod login;
pub mod registration;

pub use dashboard::{DashboardController, DashboardData, DashboardError, DashboardState};
pub use login::LoginForm;
pub use registration::{RegistrationForm, ValidationErrors};
