//! The page-fetch seam between [`PageManager`](super::PageManager) and HTTP

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::{ApiResponse, ApiResult, PageData};

/// One page request against a list endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub url: String,
    /// Zero-based, one less than the displayed page number
    pub page_index: u32,
    pub row_count: u32,
    /// Appended after the page parameters, e.g. `&status=PAID`
    pub query: Option<String>,
}

impl PageRequest {
    /// Build a request; `page` and `size` pairs in `query` are dropped since
    /// the manager owns both.
    pub fn new(url: &str, page_index: u32, row_count: u32, query: Option<&str>) -> Self {
        Self {
            url: url.to_string(),
            page_index,
            row_count,
            query: query.map(without_paging_params).filter(|q| !q.is_empty()),
        }
    }

    /// `{url}?page={index}&size={rows}{query}`
    pub fn to_path(&self) -> String {
        format!(
            "{}?page={}&size={}{}",
            self.url,
            self.page_index,
            self.row_count,
            self.query.as_deref().unwrap_or("")
        )
    }
}

fn without_paging_params(query: &str) -> String {
    query
        .split('&')
        .filter(|pair| !matches!(pair.split('=').next(), Some("page" | "size")))
        .collect::<Vec<_>>()
        .join("&")
}

/// Something that can fetch a page of `T` from the backend
#[async_trait]
pub trait PageFetcher<T>: Send + Sync
where
    T: Send + 'static,
{
    async fn fetch_page(&self, request: &PageRequest) -> ApiResult<ApiResponse<PageData<T>>>;
}

#[async_trait]
impl<T, F> PageFetcher<T> for Arc<F>
where
    T: Send + 'static,
    F: PageFetcher<T> + ?Sized,
{
    async fn fetch_page(&self, request: &PageRequest) -> ApiResult<ApiResponse<PageData<T>>> {
        (**self).fetch_page(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path() {
        let request = PageRequest::new("/admin/reservation", 0, 7, None);
        assert_eq!(request.to_path(), "/admin/reservation?page=0&size=7");

        let request = PageRequest::new("/admin/review", 12, 7, Some("&username=kim"));
        assert_eq!(request.to_path(), "/admin/review?page=12&size=7&username=kim");
    }

    #[test]
    fn test_query_cannot_override_paging() {
        let request = PageRequest::new("/admin/review", 1, 7, Some("&size=20&status=PAID&page=9"));
        assert_eq!(request.query.as_deref(), Some("&status=PAID"));
        assert_eq!(request.to_path(), "/admin/review?page=1&size=7&status=PAID");

        let request = PageRequest::new("/admin/review", 0, 7, Some("&size=20"));
        assert_eq!(request.query, None);
        assert_eq!(request.to_path(), "/admin/review?page=0&size=7");

        let request = PageRequest::new("/admin/review", 0, 7, Some("&pageSize=3&sizes=1"));
        assert_eq!(request.query.as_deref(), Some("&pageSize=3&sizes=1"));
    }
}
