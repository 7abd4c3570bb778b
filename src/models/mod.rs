//! Domain types exchanged with the booking backend
//!
//! Wire names follow the backend's camelCase JSON, except for the payment
//! gateway callback which arrives in snake_case.

mod payment;
mod reservation;
mod review;

pub use payment::*;
pub use reservation::*;
pub use review::*;
