//! A three-tab app skeleton: a primary stack for the tab bar plus per-tab
//! stacks whose history survives tab switches, seeded from a deep link.
//!
//! Run with: `cargo run --example bottom_nav`

use pagenav::{BackStack, NavOptions, Navigator};
use pagenav_router::RouteTable;

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

fn page_table() -> RouteTable<Page> {
    RouteTable::builder()
        .routes(&["/search", "/search/.*"], |_| Ok(Page::Search))
        .root_routes(&["", "/detail/.*"], |_| Ok(Page::Home))
        .route("/settings", |_| Ok(Page::Settings))
        .build()
        .expect("static route tables compile")
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
        .expect("static route tables compile")
}

/// Switch tabs the bottom-bar way: collapse to the root, detach the outgoing
/// tab's history and reattach the incoming tab's, if any.
fn select_tab(primary: &mut BackStack<Page>, tab: Page) {
    primary.navigate_with(
        tab,
        NavOptions::new()
            .pop_up_to(|p| *p == Page::Home)
            .save_state(true)
            .single_top(true)
            .restore_state(true),
    );
}

fn main() {
    let deep_link = "https://example.com/detail/42";

    // A deep link seeds both the primary stack and the tab it lands on.
    let mut primary = BackStack::seeded(
        Page::Home,
        page_table().resolve_uri(deep_link).expect("link builds"),
    );
    let mut home = BackStack::seeded(
        HomePage::List,
        home_table().resolve_uri(deep_link).expect("link builds"),
    );
    let mut navigator = Navigator::new(primary.pages()).expect("stack is never empty");

    println!("deep link {deep_link}");
    println!("  primary: {:?}", primary.pages());
    println!("  home:    {:?}", home.pages());

    // Drill deeper on the Home tab, then hop over to Search and back. The
    // navigator tells the rendering layer how to animate each change.
    home.navigate(HomePage::Detail { id: 7 });
    select_tab(&mut primary, Page::Search);
    if let Some(change) = navigator.update(primary.pages()) {
        println!("to Search: {:?}", change.ordering);
    }
    select_tab(&mut primary, Page::Home);
    if let Some(change) = navigator.update(primary.pages()) {
        println!("back Home: {:?}, back enabled: {}", change.ordering, change.back_enabled);
    }
    println!("after a round trip through Search:");
    println!("  primary: {:?}", primary.pages());
    println!("  home:    {:?} (history kept)", home.pages());

    // Back presses drain the tab stack before the primary one.
    while home.pop() {
        println!("back -> home {:?}", home.current());
    }
    while primary.pop() {
        println!("back -> primary {:?}", primary.current());
    }
    println!("at root: {:?}", primary.current());
}
