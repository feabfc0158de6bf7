//! Guestbook Service Library
//!
//! A JSON-over-HTTP guestbook: clients sign with a name and an optional
//! message, then list, fetch, update or delete signatures by id.
//!
//! The router and store are exposed here for the binaries and integration tests.

pub mod app;
pub mod error;
pub mod routes;
pub mod seed;
pub mod settings;
pub mod signature;
pub mod storage;
pub mod telemetry;
pub mod test_support;

pub use error::{GuestbookError, GuestbookResult};
pub use signature::{NewSignature, Signature, SignaturePatch};
pub use storage::SignatureStore;
