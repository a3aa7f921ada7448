//! Pagination and listing query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Validates pagination parameters and converts to database offset/limit.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 25
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be between 10 and 100
    ///
    /// # Returns
    ///
    /// `(offset, limit)` tuple for SQL queries.
    pub fn validate_and_get_offset_limit(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(25);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(10..=100).contains(&page_size) {
            return Err("Page size must be between 10 and 100".to_string());
        }

        // Widened before multiplying; u32 arithmetic overflows for large pages.
        let offset = (i64::from(page) - 1) * i64::from(page_size);
        let limit = page_size as i64;

        Ok((offset, limit))
    }

    /// Effective page number after defaulting.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Effective page size after defaulting.
    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(25)
    }
}

/// Query parameters for the post listing endpoint.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PostQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,

    /// Case-insensitive substring search over title and content.
    pub q: Option<String>,

    /// Restrict results to a single author.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub author: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>, page_size: Option<u32>) -> PaginationParams {
        PaginationParams { page, page_size }
    }

    #[test]
    fn test_defaults() {
        let (offset, limit) = params(None, None).validate_and_get_offset_limit().unwrap();
        assert_eq!(offset, 0);
        assert_eq!(limit, 25);
    }

    #[test]
    fn test_page_2_with_default_size() {
        let (offset, limit) = params(Some(2), None).validate_and_get_offset_limit().unwrap();
        assert_eq!(offset, 25);
        assert_eq!(limit, 25);
    }

    #[test]
    fn test_custom_page_and_size() {
        let (offset, limit) = params(Some(3), Some(50))
            .validate_and_get_offset_limit()
            .unwrap();
        assert_eq!(offset, 100);
        assert_eq!(limit, 50);
    }

    #[test]
    fn test_max_page_does_not_overflow() {
        let (offset, limit) = params(Some(u32::MAX), Some(100))
            .validate_and_get_offset_limit()
            .unwrap();
        assert_eq!(offset, (i64::from(u32::MAX) - 1) * 100);
        assert_eq!(limit, 100);
    }

    #[test]
    fn test_page_zero_is_error() {
        assert!(params(Some(0), None).validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(params(None, Some(9)).validate_and_get_offset_limit().is_err());
        assert!(params(None, Some(10)).validate_and_get_offset_limit().is_ok());
        assert!(params(None, Some(100)).validate_and_get_offset_limit().is_ok());
        assert!(params(None, Some(101)).validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_post_query_params_from_query_string() {
        let params: PostQueryParams =
            serde_urlencoded_from_str("page=2&page_size=10&q=rust&author=3");
        assert_eq!(params.pagination.page, Some(2));
        assert_eq!(params.q.as_deref(), Some("rust"));
        assert_eq!(params.author, Some(3));
    }

    #[test]
    fn test_post_query_params_all_absent() {
        let params: PostQueryParams = serde_urlencoded_from_str("");
        assert_eq!(params.pagination.page, None);
        assert!(params.q.is_none());
        assert!(params.author.is_none());
    }

    // Query strings arrive through axum's Query extractor; JSON with string
    // values exercises the same DisplayFromStr path.
    fn serde_urlencoded_from_str(qs: &str) -> PostQueryParams {
        let mut map = serde_json::Map::new();
        for pair in qs.split('&').filter(|p| !p.is_empty()) {
            let (k, v) = pair.split_once('=').unwrap();
            map.insert(k.to_string(), serde_json::Value::String(v.to_string()));
        }
        serde_json::from_value(serde_json::Value::Object(map)).unwrap()
    }
}
