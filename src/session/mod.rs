//! Persisted console session
//!
//! Holds the staff bearer token between invocations, the way the browser
//! console kept it in local storage.

mod store;

pub use store::*;
