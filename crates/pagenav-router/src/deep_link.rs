//! A parsed deep-link URI.
//!
//! Only the path and the flat query key/value pairs take part in route
//! matching; scheme and host are skipped over, never inspected. Callers that
//! want scheme or host filtering must do it before resolving.

use std::borrow::Cow;

/// A deep-link URI reduced to the parts route matching consults.
///
/// Parsing never fails: anything that is not a query string is the path.
/// Note that `https://example.com` has an *empty* path, distinct from
/// `https://example.com/`.
///
/// # Examples
///
/// ```
/// use pagenav_router::DeepLink;
///
/// let link = DeepLink::parse("https://example.com/detail/1?ref=mail");
/// assert_eq!(link.path(), "/detail/1");
/// assert_eq!(link.query_param("ref"), Some("mail"));
/// assert_eq!(link.query_param("other"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    path: String,
    query: Vec<(String, String)>,
}

impl DeepLink {
    /// Parses a URI string, accepting both absolute URIs and bare paths.
    pub fn parse(uri: &str) -> Self {
        let without_fragment = match uri.split_once('#') {
            Some((head, _)) => head,
            None => uri,
        };
        let after_authority = match without_fragment.split_once("://") {
            Some((_, rest)) => match rest.find(['/', '?']) {
                Some(idx) => &rest[idx..],
                None => "",
            },
            None => without_fragment,
        };
        let (path, query) = match after_authority.split_once('?') {
            Some((path, query)) => (path, query),
            None => (after_authority, ""),
        };
        Self {
            path: decode(path).into_owned(),
            query: query
                .split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| match pair.split_once('=') {
                    Some((key, value)) => (key.to_string(), decode(value).into_owned()),
                    None => (pair.to_string(), String::new()),
                })
                .collect(),
        }
    }

    /// The decoded path, empty when the URI has none.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The decoded value of the first occurrence of the query key.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Percent-decodes, leaving the input untouched when it is not valid
/// percent-encoded UTF-8. A literal `+` stays a `+`.
pub(crate) fn decode(value: &str) -> Cow<'_, str> {
    urlencoding::decode(value).unwrap_or(Cow::Borrowed(value))
}
