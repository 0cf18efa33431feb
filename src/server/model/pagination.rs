//! Page requests and paginated results.

use crate::{
    model::api::{PaginatedDto, PaginationDto},
    server::error::AppError,
};

/// Largest page size a client may request.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// A validated, 1-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Requested page, starting at 1.
    pub page: u64,
    /// Maximum number of items on the page.
    pub limit: u64,
}

impl PageRequest {
    /// Builds a page request from optional query values.
    ///
    /// # Arguments
    /// - `page` - Requested page, defaults to 1
    /// - `limit` - Requested page size, defaults to `default_limit`
    /// - `default_limit` - Page size used when `limit` is absent
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Valid request
    /// - `Err(AppError::BadRequest)` - `page` or `limit` is below 1, `limit` exceeds
    ///   `MAX_PAGE_LIMIT`, or the page offset does not fit a signed 64-bit integer
    pub fn new(page: Option<u64>, limit: Option<u64>, default_limit: u64) -> Result<Self, AppError> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(default_limit);

        if page < 1 {
            return Err(AppError::BadRequest("page must be at least 1".to_string()));
        }
        if limit < 1 {
            return Err(AppError::BadRequest("limit must be at least 1".to_string()));
        }
        if limit > MAX_PAGE_LIMIT {
            return Err(AppError::BadRequest(format!(
                "limit must be at most {}",
                MAX_PAGE_LIMIT
            )));
        }

        // The paginator computes `page_size * index` and the driver binds it as i64
        let in_range = (page - 1)
            .checked_mul(limit)
            .and_then(|offset| offset.checked_add(limit))
            .is_some_and(|end| end <= i64::MAX as u64);
        if !in_range {
            return Err(AppError::BadRequest("page is out of range".to_string()));
        }

        Ok(Self { page, limit })
    }

    /// Zero-based page index as expected by the SeaORM paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    /// Number of pages needed for `total` items, `ceil(total / limit)`.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

/// One page of results with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            pages: request.total_pages(total),
        }
    }

    /// Converts the page into its response DTO, mapping each item with `f`.
    pub fn into_dto<D, F>(self, f: F) -> PaginatedDto<D>
    where
        F: FnMut(T) -> D,
    {
        PaginatedDto {
            items: self.items.into_iter().map(f).collect(),
            pagination: PaginationDto {
                total: self.total,
                page: self.page,
                pages: self.pages,
            },
        }
    }
}
