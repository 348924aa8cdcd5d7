//! Page/limit normalization shared by the handler and the service

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Clamped pagination parameters
///
/// Out-of-range values are normalized rather than rejected:
/// `page <= 0` becomes 1, `limit <= 0` becomes 10 and `limit > 100` becomes 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        let page = if page <= 0 { DEFAULT_PAGE } else { page };
        let limit = if limit <= 0 {
            DEFAULT_LIMIT
        } else {
            limit.min(MAX_LIMIT)
        };
        Self { page, limit }
    }

    /// Build from optional query values; missing values take the defaults
    pub fn from_query(page: Option<i64>, limit: Option<i64>) -> Self {
        Self::new(page.unwrap_or(DEFAULT_PAGE), limit.unwrap_or(DEFAULT_LIMIT))
    }

    /// Number of records to skip
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}
