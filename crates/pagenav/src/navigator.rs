//! Binds a back stack's page list to the rendering layer.
//!
//! The [`Navigator`] keeps the previously observed page list and, on each
//! update, tells the rendering layer which transition ordering to use, which
//! pages left the stack (so their retained UI state can be evicted), and
//! whether a back affordance should be enabled. It never mutates the stack
//! itself; the rendering layer calls [`crate::BackStack::pop`] directly.

use crate::error::NavError;

/// The render ordering of the two pages shown during a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOrdering {
    /// The initial page is on top: a pop-like transition, the old page
    /// animates out over the new one.
    InitialOnTop,
    /// The target page is on top: a push-like transition.
    TargetOnTop,
}

/// Computes the ordering for a change from `previous` to `current`.
///
/// If the new current page was already somewhere in the previous list the
/// change is treated as a pop, otherwise as a push.
///
/// # Examples
///
/// ```
/// use pagenav::{transition_ordering, TransitionOrdering};
///
/// let previous = vec!["home", "detail"];
/// assert_eq!(
///     transition_ordering(&previous, &["home"]),
///     TransitionOrdering::InitialOnTop,
/// );
/// assert_eq!(
///     transition_ordering(&previous, &["home", "detail", "edit"]),
///     TransitionOrdering::TargetOnTop,
/// );
/// ```
pub fn transition_ordering<P: PartialEq>(previous: &[P], current: &[P]) -> TransitionOrdering {
    match current.last() {
        Some(top) if previous.contains(top) => TransitionOrdering::InitialOnTop,
        _ => TransitionOrdering::TargetOnTop,
    }
}

/// What changed in one page-list update.
#[derive(Debug, Clone, PartialEq)]
pub struct PageChange<P> {
    /// Which page renders on top during the transition.
    pub ordering: TransitionOrdering,
    /// Pages that were on the previous list but not on the new one, in
    /// previous-list order. Check [`crate::BackStack::should_retain_external_state`]
    /// before evicting their retained UI state, since a page may live on in
    /// a detached sub-stack.
    pub removed: Vec<P>,
    /// True while there is more than the root to pop back to.
    pub back_enabled: bool,
}

/// Tracks the page list across updates and derives transition metadata.
#[derive(Debug, Clone)]
pub struct Navigator<P> {
    pages: Vec<P>,
    ordering: TransitionOrdering,
}

impl<P: Clone + PartialEq> Navigator<P> {
    /// Fails with [`NavError::EmptyPages`] if the initial list is empty.
    pub fn new(pages: &[P]) -> Result<Self, NavError> {
        if pages.is_empty() {
            return Err(NavError::EmptyPages);
        }
        Ok(Self {
            pages: pages.to_vec(),
            ordering: TransitionOrdering::TargetOnTop,
        })
    }

    /// The page currently presented.
    pub fn current(&self) -> &P {
        &self.pages[self.pages.len() - 1]
    }

    /// The ordering computed by the most recent update.
    pub fn ordering(&self) -> TransitionOrdering {
        self.ordering
    }

    /// True while there is more than one page to show.
    pub fn back_enabled(&self) -> bool {
        self.pages.len() > 1
    }

    /// Observes a new page list.
    ///
    /// Returns `None` when the list is unchanged (the ordering resets to
    /// [`TransitionOrdering::TargetOnTop`]); otherwise recomputes the
    /// ordering against the previous list and reports the pages that left it.
    /// Empty updates are ignored: the last valid list stays in effect.
    pub fn update(&mut self, pages: &[P]) -> Option<PageChange<P>> {
        if pages.is_empty() {
            return None;
        }
        if pages == self.pages.as_slice() {
            self.ordering = TransitionOrdering::TargetOnTop;
            return None;
        }
        let previous = std::mem::replace(&mut self.pages, pages.to_vec());
        self.ordering = transition_ordering(&previous, &self.pages);

        let mut removed = Vec::new();
        for old in &previous {
            if !self.pages.contains(old) && !removed.contains(old) {
                removed.push(old.clone());
            }
        }
        Some(PageChange {
            ordering: self.ordering,
            removed,
            back_enabled: self.back_enabled(),
        })
    }

    /// The pages to render for a transition from `initial` to `target`, in
    /// bottom-to-top order.
    ///
    /// While the two differ both are rendered, with the most recent ordering
    /// deciding which one overlaps the other; once they settle only the
    /// target remains.
    pub fn render_pages<'a>(&self, initial: &'a P, target: &'a P) -> Vec<&'a P> {
        if initial == target {
            return vec![target];
        }
        match self.ordering {
            TransitionOrdering::TargetOnTop => vec![initial, target],
            TransitionOrdering::InitialOnTop => vec![target, initial],
        }
    }
}
