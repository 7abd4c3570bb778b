//! Page manager for list views
//!
//! Every operation after [`PageManager::init`] fetches at most one page. When
//! the fetch fails the manager keeps its previous state, logs the failure and
//! hands it back to the caller, so a view can keep showing the last good page.

use serde::Serialize;
use tracing::{debug, error, warn};

use super::{
    chapter::{self, CHAPTER_SIZE},
    errors::{PagerError, PagerResult},
    fetcher::{PageFetcher, PageRequest},
};
use crate::api::PageData;
use crate::config::DEFAULT_ROW_COUNT;

/// What a navigation call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// A page was fetched and applied
    Loaded,
    /// Nothing to do; no request was made
    Skipped,
}

/// Navigation chrome for rendering pagination links
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub current_page: u32,
    pub total_element: u64,
    pub has_next: bool,
    pub has_prev: bool,
    pub chapter_num: u32,
    pub total_page: u32,
    pub view_list: Vec<u32>,
}

/// Chaptered pagination state for one list endpoint
pub struct PageManager<T, F> {
    fetcher: F,

    /// Endpoint path, fixed by `init`
    url: String,

    /// Requested page size
    row_count: u32,

    /// 1-based page being displayed
    current_page: u32,

    /// 1-based chapter whose links are in `page_list`
    chapter_number: u32,

    total_elements: u64,
    total_pages: u32,
    has_next: bool,
    has_prev: bool,

    /// Page numbers to render as links
    page_list: Vec<u32>,

    /// Rows of the current page
    contents: Vec<T>,

    is_ready: bool,
}

impl<T, F> PageManager<T, F> {
    /// Create an unconfigured manager; call [`init`](Self::init) before use
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            url: String::new(),
            row_count: DEFAULT_ROW_COUNT,
            current_page: 1,
            chapter_number: 1,
            total_elements: 0,
            total_pages: 0,
            has_next: false,
            has_prev: false,
            page_list: Vec::new(),
            contents: Vec::new(),
            is_ready: false,
        }
    }

    /// Point the manager at `url` and reset every counter.
    ///
    /// A `row_count` of `None` or `Some(0)` falls back to the default page
    /// size. No request is made.
    pub fn init(&mut self, url: impl Into<String>, row_count: Option<u32>) -> PagerResult<()> {
        let url = url.into();
        if url.is_empty() {
            return Err(PagerError::EmptyUrl);
        }

        self.url = url;
        self.row_count = row_count.filter(|&rows| rows > 0).unwrap_or(DEFAULT_ROW_COUNT);
        self.current_page = 1;
        self.chapter_number = 1;
        self.total_elements = 0;
        self.total_pages = 0;
        self.has_next = false;
        self.has_prev = false;
        self.page_list = Vec::new();
        self.contents = Vec::new();
        self.is_ready = true;

        debug!("Page manager ready for {} ({} rows)", self.url, self.row_count);
        Ok(())
    }

    /// Drop the rows and page links.
    ///
    /// Readiness, counters and the endpoint survive, so load calls after
    /// `destroy` run against the old counters until `init` is called again.
    pub fn destroy(&mut self) {
        self.contents.clear();
        self.page_list.clear();
    }

    pub fn contents(&self) -> &[T] {
        &self.contents
    }

    pub fn page_list(&self) -> &[u32] {
        &self.page_list
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn chapter_number(&self) -> u32 {
        self.chapter_number
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn has_prev(&self) -> bool {
        self.has_prev
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            current_page: self.current_page,
            total_element: self.total_elements,
            has_next: self.has_next,
            has_prev: self.has_prev,
            chapter_num: self.chapter_number,
            total_page: self.total_pages,
            view_list: self.page_list.clone(),
        }
    }

    fn ensure_ready(&self) -> PagerResult<()> {
        if self.is_ready {
            Ok(())
        } else {
            Err(PagerError::NotReady)
        }
    }
}

impl<T, F> PageManager<T, F>
where
    T: Send + 'static,
    F: PageFetcher<T>,
{
    /// Fetch the first page and show chapter one
    pub async fn load_data(&mut self, query: Option<&str>) -> PagerResult<Navigation> {
        self.ensure_ready()?;

        let page = self.fetch(0, query).await?;

        self.contents = page.content;
        self.total_pages = page.total_pages;
        self.total_elements = page.total_elements;
        self.has_next = self.total_pages > CHAPTER_SIZE;
        self.current_page = 1;

        if self.total_elements == 0 {
            self.page_list = vec![1];
            return Ok(Navigation::Loaded);
        }

        let last_page_idx = self.total_pages.min(CHAPTER_SIZE);
        self.page_list = (1..=last_page_idx).collect();
        Ok(Navigation::Loaded)
    }

    /// Move to the first page of the next chapter
    pub async fn go_next_chapter(&mut self, query: Option<&str>) -> PagerResult<Navigation> {
        self.ensure_ready()?;
        if !self.has_next {
            return Ok(Navigation::Skipped);
        }

        let next_first_page = self.chapter_number * CHAPTER_SIZE + 1;
        let page = self.fetch(next_first_page - 1, query).await?;

        self.chapter_number += 1;
        self.total_elements = page.total_elements;
        self.total_pages = page.total_pages;
        self.contents = page.content;
        self.current_page = next_first_page;
        self.has_prev = true;

        if self.total_pages == 0 {
            // Overwrites next_first_page; the chapter still advances.
            self.page_list = vec![1];
            self.current_page = 1;
            return Ok(Navigation::Loaded);
        }

        let last_page = chapter::last_page_in_window(self.total_pages, self.chapter_number);
        self.has_next = self.total_pages > CHAPTER_SIZE * self.chapter_number;
        self.page_list = chapter::window(self.chapter_number, last_page);
        Ok(Navigation::Loaded)
    }

    /// Move to the first page of the previous chapter.
    ///
    /// The previous chapter always gets a full ten-page window and `has_next`
    /// is set without looking at the page count.
    pub async fn go_prev_chapter(&mut self, query: Option<&str>) -> PagerResult<Navigation> {
        self.ensure_ready()?;
        if !self.has_prev || self.chapter_number < 2 {
            return Ok(Navigation::Skipped);
        }

        let prev_first_page = chapter::first_page(self.chapter_number - 1);
        let page = self.fetch(prev_first_page - 1, query).await?;

        self.total_elements = page.total_elements;
        self.contents = page.content;
        self.has_next = true;
        self.current_page = prev_first_page;
        self.chapter_number -= 1;
        self.has_prev = self.chapter_number > 1;
        self.page_list = chapter::window(self.chapter_number, CHAPTER_SIZE);
        Ok(Navigation::Loaded)
    }

    /// Show page `to` without touching the chapter links
    pub async fn move_page(&mut self, to: u32, query: Option<&str>) -> PagerResult<Navigation> {
        self.ensure_ready()?;
        if to == self.current_page {
            return Ok(Navigation::Skipped);
        }
        if to == 0 {
            return Err(PagerError::InvalidPage(to));
        }

        let page = self.fetch(to - 1, query).await?;

        self.total_pages = page.total_pages;
        self.total_elements = page.total_elements;
        self.contents = page.content;
        self.current_page = to;
        Ok(Navigation::Loaded)
    }

    async fn fetch(&self, page_index: u32, query: Option<&str>) -> PagerResult<PageData<T>> {
        let request = PageRequest::new(&self.url, page_index, self.row_count, query);
        debug!("Fetching page: {}", request.to_path());

        let result = match self.fetcher.fetch_page(&request).await {
            Ok(response) => response.into_data(),
            Err(e) => Err(e),
        };

        result.map_err(|e| {
            if e.is_application_failure() {
                warn!("Page request {} was rejected: {}", request.to_path(), e);
            } else {
                error!("Page request {} failed: {}", request.to_path(), e);
            }
            PagerError::Api(e)
        })
    }
}
