//! Small helpers shared across the console

pub mod common;
pub mod fs;
pub mod text;

pub use common::{get_uuid, period_at_date};
