//! Integration tests for transition ordering and render-page calculation.

use pagenav::{transition_ordering, BackStack, NavError, Navigator, TransitionOrdering};
use pretty_assertions::assert_eq;

#[test]
fn push_renders_target_on_top() {
    let previous = vec!["home"];
    assert_eq!(
        transition_ordering(&previous, &["home", "detail"]),
        TransitionOrdering::TargetOnTop
    );
}

#[test]
fn pop_renders_initial_on_top() {
    let previous = vec!["home", "detail"];
    assert_eq!(
        transition_ordering(&previous, &["home"]),
        TransitionOrdering::InitialOnTop
    );
}

#[test]
fn navigating_to_a_previously_seen_page_counts_as_a_pop() {
    // popUpTo back to a page deeper in the stack: the target was already
    // present, so the old page should animate out over it.
    let previous = vec!["home", "a", "b"];
    assert_eq!(
        transition_ordering(&previous, &["home", "a"]),
        TransitionOrdering::InitialOnTop
    );
}

#[test]
fn navigator_rejects_empty_initial_pages() {
    assert_eq!(
        Navigator::<&str>::new(&[]).unwrap_err(),
        NavError::EmptyPages
    );
}

#[test]
fn update_reports_ordering_removed_pages_and_back_enablement() {
    let mut nav = Navigator::new(&["home", "a", "b"]).unwrap();

    let change = nav.update(&["home"]).unwrap();
    assert_eq!(change.ordering, TransitionOrdering::InitialOnTop);
    assert_eq!(change.removed, vec!["a", "b"]);
    assert!(!change.back_enabled);

    let change = nav.update(&["home", "detail"]).unwrap();
    assert_eq!(change.ordering, TransitionOrdering::TargetOnTop);
    assert!(change.removed.is_empty());
    assert!(change.back_enabled);
}

#[test]
fn update_with_unchanged_pages_is_none() {
    let mut nav = Navigator::new(&["home", "detail"]).unwrap();
    assert!(nav.update(&["home", "detail"]).is_none());
    assert_eq!(nav.ordering(), TransitionOrdering::TargetOnTop);
}

#[test]
fn render_pages_orders_by_transition() {
    let mut nav = Navigator::new(&["home"]).unwrap();

    nav.update(&["home", "detail"]);
    assert_eq!(nav.render_pages(&"home", &"detail"), vec![&"home", &"detail"]);

    nav.update(&["home"]);
    assert_eq!(nav.render_pages(&"detail", &"home"), vec![&"home", &"detail"]);

    // Settled: only the target is rendered.
    assert_eq!(nav.render_pages(&"home", &"home"), vec![&"home"]);
}

#[test]
fn navigator_follows_a_back_stack() {
    let mut stack = BackStack::with_root("home");
    let mut nav = Navigator::new(stack.pages()).unwrap();

    stack.navigate("detail");
    let change = nav.update(stack.pages()).unwrap();
    assert_eq!(change.ordering, TransitionOrdering::TargetOnTop);

    stack.pop();
    let change = nav.update(stack.pages()).unwrap();
    assert_eq!(change.ordering, TransitionOrdering::InitialOnTop);
    assert_eq!(change.removed, vec!["detail"]);
}
