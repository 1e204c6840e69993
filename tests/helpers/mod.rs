//! Test helpers module
//!
//! Shared mock backend server and canned payloads for the integration
//! tests.

pub mod backend_mock;
pub mod test_data;

pub use backend_mock::{BackendMockServer, MockResponseConfig};
