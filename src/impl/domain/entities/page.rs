use fractic_server_error::ServerError;

use crate::errors::InvalidPageRequest;

/// 1-indexed page request over a fully fetched collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: usize,
    page: usize,
}

impl PageRequest {
    pub fn new(limit: usize, page: usize) -> Result<Self, ServerError> {
        if limit == 0 || page == 0 {
            return Err(InvalidPageRequest::new(limit, page));
        }
        Ok(Self { limit, page })
    }

    pub fn first(limit: usize) -> Result<Self, ServerError> {
        Self::new(limit, 1)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Same page size, following page.
    pub fn next(&self) -> Self {
        Self {
            limit: self.limit,
            page: self.page.saturating_add(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1 && self.total_pages > 0
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            total_pages: self.total_pages,
            current_page: self.current_page,
        }
    }
}
