//! Integration tests for route-table resolution and page building.

use pagenav::BackStack;
use pagenav_router::{ArgError, RouteTable};
use pretty_assertions::assert_eq;

#[derive(Clone, Debug, PartialEq)]
enum Page {
    Search,
    Home,
    Settings,
}

#[derive(Clone, Debug, PartialEq)]
enum HomePage {
    List,
    Detail { id: u32 },
}

/// The primary page family of a three-tab app: `Home` is the root and also
/// swallows `/detail/...` links so the detail stack opens on the Home tab.
fn page_table() -> RouteTable<Page> {
    RouteTable::builder()
        .routes(&["/search", "/search/.*"], |_| Ok(Page::Search))
        .root_routes(&["", "/detail/.*"], |_| Ok(Page::Home))
        .route("/settings", |_| Ok(Page::Settings))
        .build()
        .unwrap()
}

fn home_table() -> RouteTable<HomePage> {
    RouteTable::builder()
        .root_route("", |_| Ok(HomePage::List))
        .route("/detail/{id}", |args| {
            Ok(HomePage::Detail {
                id: args.parse("id")?,
            })
        })
        .build()
        .unwrap()
}

#[test]
fn root_match_resolves_to_the_root_alone() {
    let pages = page_table().resolve_uri("https://example.com").unwrap();
    assert_eq!(pages, vec![Page::Home]);
}

#[test]
fn non_root_match_gets_the_root_synthesized_beneath_it() {
    let pages = page_table()
        .resolve_uri("https://example.com/settings")
        .unwrap();
    assert_eq!(pages, vec![Page::Home, Page::Settings]);
}

#[test]
fn first_matching_entry_wins() {
    let pages = page_table()
        .resolve_uri("https://example.com/search/cats")
        .unwrap();
    assert_eq!(pages, vec![Page::Home, Page::Search]);
}

#[test]
fn alternate_root_templates_resolve_to_the_root() {
    let pages = page_table()
        .resolve_uri("https://example.com/detail/9")
        .unwrap();
    assert_eq!(pages, vec![Page::Home]);
}

#[test]
fn no_match_resolves_to_an_empty_list() {
    let pages = page_table()
        .resolve_uri("https://example.com/unknown")
        .unwrap();
    assert!(pages.is_empty());
}

#[test]
fn captured_args_populate_page_fields() {
    let pages = home_table()
        .resolve_uri("https://example.com/detail/7")
        .unwrap();
    assert_eq!(pages, vec![HomePage::List, HomePage::Detail { id: 7 }]);
}

#[test]
fn unparsable_capture_is_a_build_error() {
    let err = home_table()
        .resolve_uri("https://example.com/detail/seven")
        .unwrap_err();
    assert_eq!(err.template, "/detail/{id}");
    assert!(matches!(err.source, ArgError::Parse { ref name, .. } if name == "id"));
}

#[test]
fn missing_required_arg_is_a_build_error() {
    let table: RouteTable<HomePage> = RouteTable::builder()
        .route("/detail/.*", |args| {
            Ok(HomePage::Detail {
                id: args.parse("id")?,
            })
        })
        .build()
        .unwrap();

    let err = table
        .resolve_uri("https://example.com/detail/7")
        .unwrap_err();
    assert_eq!(err.source, ArgError::Missing { name: "id".into() });
}

#[test]
fn family_without_a_root_resolves_the_match_alone() {
    let table: RouteTable<Page> = RouteTable::builder()
        .route("/settings", |_| Ok(Page::Settings))
        .build()
        .unwrap();

    let pages = table.resolve_uri("https://example.com/settings").unwrap();
    assert_eq!(pages, vec![Page::Settings]);
}

#[test]
fn entries_keep_declaration_order() {
    let table = page_table();
    let templates: Vec<&str> = table.entries().iter().map(|e| e.template()).collect();
    assert_eq!(
        templates,
        vec!["/search", "/search/.*", "", "/detail/.*", "/settings"]
    );
    assert!(table.entries()[2].is_root());
}

#[test]
fn resolution_seeds_a_back_stack() {
    let resolved = home_table()
        .resolve_uri("https://example.com/detail/3")
        .unwrap();
    let mut stack = BackStack::seeded(HomePage::List, resolved);

    assert_eq!(
        stack.pages(),
        &[HomePage::List, HomePage::Detail { id: 3 }]
    );
    assert!(stack.pop());
    assert_eq!(stack.pages(), &[HomePage::List]);
}

#[test]
fn a_miss_seeds_the_bare_root() {
    let resolved = home_table()
        .resolve_uri("https://example.com/unknown")
        .unwrap();
    let stack = BackStack::seeded(HomePage::List, resolved);

    assert_eq!(stack.pages(), &[HomePage::List]);
}
