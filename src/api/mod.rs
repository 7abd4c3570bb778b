//! Backend API access
//!
//! Every backend response is wrapped in an envelope carrying an application
//! code; this module owns the HTTP client, the envelope types, and the
//! request/response interception around them.

pub mod client;
pub mod envelope;
pub mod errors;

pub use client::*;
pub use envelope::*;
pub use errors::*;
