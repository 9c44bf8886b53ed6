//! HTTP transport boundary for the Contact Keeper client.
//!
//! Stores talk to the remote API only through the [`Transport`] trait:
//! - [`HttpTransport`]: reqwest-backed, holds the process-wide bearer header
//! - `testing::FakeTransport` (feature `testing`): scripted responses for tests
//!
//! Every failure is a [`TransportError`]; [`TransportError::user_message`]
//! turns it into the one string shown to the user.

mod error;
mod http;
mod normalize;
mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
pub use normalize::{extract_server_message, normalize};
pub use transport::{decode, ApiRequest, HttpMethod, Transport};
