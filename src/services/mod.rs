//! External service clients
//!
//! All business logic (user storage, matching, event recommendation) lives
//! in the Mutuals backend; this module holds the HTTP client for it.

pub mod backend;

pub use backend::BackendClient;
