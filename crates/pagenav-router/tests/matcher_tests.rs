//! Integration tests for template compilation and matching.

use pagenav_router::{DeepLink, RouteMatcher};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn matched(template: &str, uri: &str) -> Option<Vec<(String, String)>> {
    let matcher = RouteMatcher::new(template).unwrap();
    matcher.match_uri(&DeepLink::parse(uri)).map(|args| {
        let mut pairs: Vec<(String, String)> = args
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        pairs.sort();
        pairs
    })
}

#[rstest]
// The empty template matches only the empty path, not sub-paths.
#[case("", "https://example.com", true)]
#[case("", "https://example.com/detail", false)]
#[case("/detail", "https://example.com/detail", true)]
#[case("/detail", "https://example.com/other", false)]
// Wildcards match zero or more characters.
#[case("/search/.*", "https://example.com/search/", true)]
#[case("/search/.*", "https://example.com/search/anything/nested", true)]
#[case("/search/.*", "https://example.com/search", false)]
// A literal dot is not a wildcard.
#[case("/v1.0/status", "https://example.com/v1.0/status", true)]
#[case("/v1.0/status", "https://example.com/v1x0/status", false)]
fn path_matching(#[case] template: &str, #[case] uri: &str, #[case] matches: bool) {
    assert_eq!(matched(template, uri).is_some(), matches, "{template} vs {uri}");
}

#[test]
fn matches_with_param() {
    assert_eq!(
        matched("/detail/{id}", "https://example.com/detail/1").unwrap(),
        vec![("id".to_string(), "1".to_string())]
    );
}

#[test]
fn empty_path_match_has_no_args() {
    assert_eq!(matched("", "https://example.com").unwrap(), vec![]);
}

#[test]
fn params_and_wildcards_coexist() {
    assert_eq!(
        matched("/files/{name}/.*", "https://example.com/files/report/v2/raw").unwrap(),
        vec![("name".to_string(), "report".to_string())]
    );
}

#[test]
fn path_captures_are_decoded() {
    assert_eq!(
        matched("/search/{query}", "https://example.com/search/hello%20world").unwrap(),
        vec![("query".to_string(), "hello world".to_string())]
    );
}

#[test]
fn matches_query_param_present() {
    assert_eq!(
        matched("/search?query={query}", "https://example.com/search?query=test").unwrap(),
        vec![("query".to_string(), "test".to_string())]
    );
}

#[test]
fn matches_query_param_missing() {
    // A missing query key is not a failure, its arguments are just absent.
    assert_eq!(
        matched("/search?query={query}", "https://example.com/search").unwrap(),
        vec![]
    );
}

#[test]
fn query_keys_are_independently_optional() {
    assert_eq!(
        matched(
            "/list?sort={sort}&filter={filter}",
            "https://example.com/list?filter=done"
        )
        .unwrap(),
        vec![("filter".to_string(), "done".to_string())]
    );
}

#[test]
fn query_value_with_multiple_placeholders() {
    assert_eq!(
        matched(
            "/calendar?range={start}..{end}",
            "https://example.com/calendar?range=2020-01-01..2020-02-01"
        )
        .unwrap(),
        vec![
            ("end".to_string(), "2020-02-01".to_string()),
            ("start".to_string(), "2020-01-01".to_string()),
        ]
    );
}

#[test]
fn echoed_placeholder_is_discarded() {
    // A query value that is literally the `{name}` template text counts as
    // no capture, not as a value.
    assert_eq!(
        matched(
            "/search?query={query}",
            "https://example.com/search?query=%7Bquery%7D"
        )
        .unwrap(),
        vec![]
    );
}

#[test]
fn literal_query_value_requires_exact_match_when_present() {
    let template = "/feed?format=rss";
    assert_eq!(
        matched(template, "https://example.com/feed?format=rss").unwrap(),
        vec![]
    );
    assert!(matched(template, "https://example.com/feed?format=atom").is_none());
    assert_eq!(matched(template, "https://example.com/feed").unwrap(), vec![]);
}

#[test]
fn mismatched_supplied_query_fails_the_whole_match() {
    assert!(matched(
        "/calendar?range={start}..{end}",
        "https://example.com/calendar?range=justone"
    )
    .is_none());
}

#[test]
fn path_must_match_before_query_is_consulted() {
    assert!(matched(
        "/search?query={query}",
        "https://example.com/other?query=test"
    )
    .is_none());
}

#[test]
fn template_is_kept() {
    let matcher = RouteMatcher::new("/detail/{id}").unwrap();
    assert_eq!(matcher.template(), "/detail/{id}");
}
