//! Response envelope shared by every endpoint

use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};

/// Envelope code for a successful call
pub const SUCCESS_CODE: i32 = 0;

/// Envelope code the backend uses when the bearer token has expired
pub const TOKEN_EXPIRED_CODE: i32 = 9;

/// `{ code, message, data }` wrapper around every response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    #[cfg(test)]
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: String::new(),
            data: Some(data),
        }
    }

    #[cfg(test)]
    pub fn failure(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Payload of a successful envelope
    pub fn into_data(self) -> ApiResult<T> {
        if !self.is_success() {
            return Err(ApiError::Rejected {
                code: self.code,
                message: self.message,
            });
        }
        self.data.ok_or(ApiError::MissingData)
    }

    /// Like [`into_data`](Self::into_data) for calls whose success may carry no payload
    pub fn into_result(self) -> ApiResult<Option<T>> {
        if !self.is_success() {
            return Err(ApiError::Rejected {
                code: self.code,
                message: self.message,
            });
        }
        Ok(self.data)
    }
}

/// One page of a list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData<T> {
    pub content: Vec<T>,
    pub total_pages: u32,
    pub total_elements: u64,
}
