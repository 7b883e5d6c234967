//! This modules defines the common functionality for paging data.

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of questions on each page.
    pub page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            page_size: 10,
        }
    }
}

/// The slice of rows that make up one page.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PageWindow {
    /// The number of rows to skip.
    pub offset: u64,
    /// The maximum number of rows on the page.
    pub limit: u64,
}

impl PageWindow {
    /// Get the window for the one-based `page` when pages hold `page_size` rows.
    ///
    /// Returns `None` for page zero, which can never contain any rows.
    pub fn new(page: u64, page_size: u64) -> Option<Self> {
        let offset = page.checked_sub(1)?.checked_mul(page_size)?;

        Some(Self {
            offset,
            limit: page_size,
        })
    }
}
