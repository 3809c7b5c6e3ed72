//! Captured route arguments and their typed accessors.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::ArgError;

/// The name→value map a matcher extracted from a deep link.
///
/// Page builders read their fields out of this map; the typed accessors cover
/// the primitive kinds a page field may declare (`bool`, `char`, the integer
/// and float widths) via [`FromStr`].
///
/// # Examples
///
/// ```
/// use pagenav_router::{DeepLink, RouteMatcher};
///
/// let matcher = RouteMatcher::new("/detail/{id}").unwrap();
/// let args = matcher
///     .match_uri(&DeepLink::parse("/detail/42"))
///     .unwrap();
/// assert_eq!(args.parse::<u32>("id"), Ok(42));
/// assert!(args.parse::<bool>("id").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteArgs {
    values: HashMap<String, String>,
}

impl RouteArgs {
    pub(crate) fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// A map with no captures, used when building a root page synthesized
    /// beneath a deeper match.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The captured value, if the argument was present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// The captured value, or [`ArgError::Missing`].
    pub fn required(&self, name: &str) -> Result<&str, ArgError> {
        self.get(name).ok_or_else(|| ArgError::Missing {
            name: name.to_string(),
        })
    }

    /// Parses a required argument into a primitive field type.
    pub fn parse<T: FromStr>(&self, name: &str) -> Result<T, ArgError> {
        let value = self.required(name)?;
        value.parse().map_err(|_| ArgError::Parse {
            name: name.to_string(),
            value: value.to_string(),
            expected: std::any::type_name::<T>(),
        })
    }

    /// Parses an optional argument; an absent argument is `Ok(None)`.
    pub fn parse_opt<T: FromStr>(&self, name: &str) -> Result<Option<T>, ArgError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| ArgError::Parse {
                    name: name.to_string(),
                    value: value.to_string(),
                    expected: std::any::type_name::<T>(),
                }),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the captured (name, value) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for RouteArgs {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
