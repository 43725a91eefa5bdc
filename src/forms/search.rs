//! Query parameters accepted by `/api/search`.

use serde::Deserialize;

use crate::{
    domain::{
        search::SearchRequest,
        types::{PageNumber, PageSize, SearchTerm},
    },
    forms::FormError,
};

/// Raw query string of a search call.
///
/// Numbers are captured as text so that a malformed value falls back to its
/// default instead of rejecting the whole request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQueryParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

impl SearchQueryParams {
    /// Builds the parameters from raw query pairs; the first occurrence of
    /// a repeated key wins and unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut params.q,
                "limit" => &mut params.limit,
                "page" => &mut params.page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

fn parse_or<T: From<i64>>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .map(T::from)
        .unwrap_or(default)
}

impl TryFrom<SearchQueryParams> for SearchRequest {
    type Error = FormError;

    fn try_from(params: SearchQueryParams) -> Result<Self, Self::Error> {
        let query = SearchTerm::new(params.q.as_deref().unwrap_or_default())
            .map_err(|_| FormError::MissingQuery)?;

        let per_page = parse_or(params.limit.as_deref(), PageSize::DEFAULT);
        let page = parse_or(params.page.as_deref(), PageNumber::DEFAULT);

        Ok(SearchRequest::new(query).per_page(per_page).page(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(q: Option<&str>, limit: Option<&str>, page: Option<&str>) -> SearchQueryParams {
        SearchQueryParams {
            q: q.map(str::to_string),
            limit: limit.map(str::to_string),
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults_applied_when_absent() {
        let request = SearchRequest::try_from(params(Some(" actix "), None, None)).unwrap();

        assert_eq!(request.query.as_str(), "actix");
        assert_eq!(request.per_page.get(), 10);
        assert_eq!(request.page.get(), 1);
    }

    #[test]
    fn test_explicit_values_are_kept() {
        let request =
            SearchRequest::try_from(params(Some("serde"), Some("25"), Some("3"))).unwrap();

        assert_eq!(request.per_page.get(), 25);
        assert_eq!(request.page.get(), 3);
    }

    #[test]
    fn test_non_numeric_values_fall_back() {
        let request =
            SearchRequest::try_from(params(Some("serde"), Some("many"), Some("2.5"))).unwrap();

        assert_eq!(request.per_page.get(), 10);
        assert_eq!(request.page.get(), 1);
    }

    #[test]
    fn test_zero_and_negative_values_pass_through() {
        let request =
            SearchRequest::try_from(params(Some("serde"), Some("0"), Some("-4"))).unwrap();

        assert_eq!(request.per_page.get(), 0);
        assert_eq!(request.page.get(), -4);
    }

    #[test]
    fn test_repeated_keys_keep_first_value() {
        let pairs = [
            ("q", "first"),
            ("limit", "5"),
            ("q", "second"),
            ("limit", "6"),
            ("sort", "forks"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));

        let params = SearchQueryParams::from_pairs(pairs);

        assert_eq!(params.q.as_deref(), Some("first"));
        assert_eq!(params.limit.as_deref(), Some("5"));
        assert_eq!(params.page, None);
    }

    #[test]
    fn test_missing_or_blank_query_is_rejected() {
        assert_eq!(
            SearchRequest::try_from(params(None, Some("5"), None)),
            Err(FormError::MissingQuery)
        );
        assert_eq!(
            SearchRequest::try_from(params(Some("   "), None, None)),
            Err(FormError::MissingQuery)
        );
    }
}
