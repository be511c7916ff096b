//! Page requests and their translation into query windows.

use thiserror::Error;

use crate::query::Window;

/// Page index used when only a page size is requested (1-based).
pub const DEFAULT_PAGE_INDEX: i64 = 1;

/// Page size used when only a page index is requested.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Errors for page requests that cannot be satisfied.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PaginationError {
    /// The requested page index is zero or negative.
    #[error("Page index should start at 1")]
    InvalidPageIndex,

    /// The requested page size is zero or negative.
    #[error("Page size cannot be less than one")]
    InvalidPageSize,
}

/// A validated page of results.
///
/// # Example
///
/// ```
/// use whereclause_rs::pagination::Pagination;
///
/// let page = Pagination::from_request(Some(2), Some(2)).unwrap().unwrap();
/// assert_eq!(page.offset(), 2);
/// assert_eq!(page.limit(), 2);
///
/// assert!(Pagination::from_request(None, None).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Pagination {
    /// Builds a pagination from an optional 1-based page index and page size.
    ///
    /// Returns `Ok(None)` when neither is given. If only one is given the other
    /// falls back to [`DEFAULT_PAGE_INDEX`] or [`DEFAULT_PAGE_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] if the page index or size is below one.
    pub fn from_request(
        page_index: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Option<Self>, PaginationError> {
        if page_index.is_none() && page_size.is_none() {
            return Ok(None);
        }

        let index = page_index.unwrap_or(DEFAULT_PAGE_INDEX);
        let size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        let page_index = index
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .ok_or(PaginationError::InvalidPageIndex)?;
        let page_size = usize::try_from(size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or(PaginationError::InvalidPageSize)?;

        Ok(Some(Self {
            page_index,
            page_size,
        }))
    }

    /// Zero-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Number of records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of records to skip.
    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }

    /// Maximum number of records to return.
    pub fn limit(&self) -> usize {
        self.page_size
    }

    /// The query window for this page.
    pub fn window(&self) -> Window {
        Window::new(self.offset(), self.limit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pagination() {
        assert_eq!(Pagination::from_request(None, None), Ok(None));
    }

    #[test]
    fn test_pagination() {
        let page = Pagination::from_request(Some(5), Some(2)).unwrap().unwrap();
        assert_eq!(page.page_index(), 4);
        assert_eq!(page.page_size(), 2);
        assert_eq!(page.offset(), 8);
    }

    #[test]
    fn test_pagination_no_page_index() {
        let page = Pagination::from_request(None, Some(2)).unwrap().unwrap();
        assert_eq!(page.page_index(), 0);
        assert_eq!(page.page_size(), 2);
    }

    #[test]
    fn test_pagination_no_page_size() {
        let page = Pagination::from_request(Some(3), None).unwrap().unwrap();
        assert_eq!(page.page_index(), 2);
        assert_eq!(page.page_size(), 10);
        assert_eq!(page.window(), Window::new(20, 10));
    }

    #[test]
    fn test_invalid_page_index() {
        assert_eq!(
            Pagination::from_request(Some(0), Some(2)),
            Err(PaginationError::InvalidPageIndex)
        );
        assert_eq!(
            Pagination::from_request(Some(-3), None).unwrap_err().to_string(),
            "Page index should start at 1"
        );
    }

    #[test]
    fn test_invalid_page_size() {
        assert_eq!(
            Pagination::from_request(Some(1), Some(0)),
            Err(PaginationError::InvalidPageSize)
        );
        assert_eq!(
            Pagination::from_request(None, Some(-1)).unwrap_err().to_string(),
            "Page size cannot be less than one"
        );
    }
}
