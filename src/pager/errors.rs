//! Error types for page navigation

use thiserror::Error;

use crate::api::ApiError;

#[derive(Error, Debug)]
pub enum PagerError {
    #[error("Page manager is not ready, call init first")]
    NotReady,

    #[error("Page manager endpoint must not be empty")]
    EmptyUrl,

    #[error("Page {0} does not exist, pages start at 1")]
    InvalidPage(u32),

    #[error("No page manager in this slot")]
    Missing,

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type PagerResult<T> = Result<T, PagerError>;
