//! Chaptered pagination over the backend's list endpoints
//!
//! Pages are grouped into chapters of ten. A [`PageManager`] fetches one page
//! at a time and keeps the chapter bookkeeping (which page numbers to offer as
//! links, whether a next/previous chapter exists) on the client side.

pub mod chapter;
pub mod errors;
pub mod fetcher;
pub mod manager;
pub mod slot;

pub use chapter::CHAPTER_SIZE;
pub use fetcher::*;
pub use manager::*;
pub use slot::*;
