//! Shared query parameter types for API handlers.

use cinedex_core::pagination::PageRequest;

/// Page/limit pagination parameters (`?page=&limit=`).
///
/// Built from the raw query pairs rather than a derived struct, so repeated
/// keys and non-numeric values fall back to the defaults instead of
/// rejecting the request. The last occurrence of a repeated key wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::default(), |mut params, (key, value)| {
                match key.as_str() {
                    "page" => params.page = Some(value),
                    "limit" => params.limit = Some(value),
                    _ => {}
                }
                params
            })
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::parse(self.page.as_deref(), self.limit.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn picks_page_and_limit() {
        let params = PageParams::from_pairs(pairs(&[("page", "2"), ("limit", "5")]));
        assert_eq!(params.page_request(), PageRequest { page: 2, limit: 5 });
    }

    #[test]
    fn last_repeated_key_wins() {
        let params = PageParams::from_pairs(pairs(&[("page", "1"), ("page", "3")]));
        assert_eq!(params.page.as_deref(), Some("3"));
        assert_eq!(params.page_request(), PageRequest { page: 3, limit: 10 });
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let params = PageParams::from_pairs(pairs(&[("sort", "title"), ("q", "dune")]));
        assert_eq!(params, PageParams::default());
        assert_eq!(params.page_request(), PageRequest::default());
    }
}
