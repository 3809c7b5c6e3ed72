//! The back-stack state machine.
//!
//! A [`BackStack`] is an ordered, non-empty sequence of pages. The first page
//! is the root and can never be removed; the last page is the one currently
//! presented. Mutation happens through [`BackStack::navigate_with`],
//! [`BackStack::pop`], [`BackStack::pop_to_root`] and [`BackStack::set`], all
//! of which keep the root invariant and report whether anything changed.
//!
//! Besides the live stack, a back stack keeps a set of *saved* sub-stacks:
//! a `navigate_with` call that truncates the stack with
//! [`NavOptions::save_state`] detaches the truncated portion instead of
//! discarding it, and a later navigation with [`NavOptions::restore_state`]
//! (or a plain [`BackStack::pop`] back onto the detached portion's head)
//! reattaches it. This is what lets a bottom-navigation UI preserve each
//! tab's history across tab switches.

use std::fmt;

use tracing::debug;

use crate::error::NavError;

/// Options for [`BackStack::navigate_with`].
///
/// Built with a consuming builder, mirroring the order in which the options
/// are applied: `pop_up_to` truncation first, then restore-or-push.
///
/// # Examples
///
/// ```
/// use pagenav::{BackStack, NavOptions};
///
/// let mut stack = BackStack::new(vec!["home", "detail"]).unwrap();
/// stack.navigate_with(
///     "settings",
///     NavOptions::new().pop_up_to(|p| *p == "home").save_state(true),
/// );
/// assert_eq!(stack.pages(), &["home", "settings"]);
/// ```
pub struct NavOptions<'a, P> {
    pop_up_to: Option<Box<dyn Fn(&P) -> bool + 'a>>,
    inclusive: bool,
    save_state: bool,
    single_top: bool,
    restore_state: bool,
}

impl<'a, P> NavOptions<'a, P> {
    pub fn new() -> Self {
        Self {
            pop_up_to: None,
            inclusive: false,
            save_state: false,
            single_top: false,
            restore_state: false,
        }
    }

    /// Pop the stack up to the top-most page matching the predicate before
    /// pushing. Common predicates are `|p| *p == some_page` or
    /// `|p| matches!(p, Page::Home)`.
    pub fn pop_up_to(mut self, predicate: impl Fn(&P) -> bool + 'a) -> Self {
        self.pop_up_to = Some(Box::new(predicate));
        self
    }

    /// If true the page matching the `pop_up_to` predicate is popped as well.
    /// Otherwise only the pages above it are popped. The root page is never
    /// popped either way.
    pub fn inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = inclusive;
        self
    }

    /// Detach the portion removed by `pop_up_to` into a saved stack instead
    /// of discarding it.
    pub fn save_state(mut self, save_state: bool) -> Self {
        self.save_state = save_state;
        self
    }

    /// Skip the push when the page already equals the current page.
    pub fn single_top(mut self, single_top: bool) -> Self {
        self.single_top = single_top;
        self
    }

    /// Before pushing, look for a saved stack containing the page and
    /// reattach it instead of starting fresh.
    pub fn restore_state(mut self, restore_state: bool) -> Self {
        self.restore_state = restore_state;
        self
    }
}

impl<P> Default for NavOptions<'_, P> {
    fn default() -> Self {
        Self::new()
    }
}

/// An opinionated back stack. Guarantees there is always a root page on the
/// stack; pages can only be pushed on top and popped back off.
///
/// Pages are compared by value, so `P` is any cheap-to-clone type with
/// structural equality. A closed enum with one variant per screen is the
/// intended shape.
///
/// # Examples
///
/// ```
/// use pagenav::BackStack;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Page {
///     Home,
///     Detail(u32),
/// }
///
/// let mut stack = BackStack::with_root(Page::Home);
/// stack.navigate(Page::Detail(1));
/// assert_eq!(stack.current(), &Page::Detail(1));
/// assert!(stack.pop());
/// assert_eq!(stack.pages(), &[Page::Home]);
/// assert!(!stack.pop());
/// ```
#[derive(Clone)]
pub struct BackStack<P> {
    pages: Vec<P>,
    saved: Vec<Vec<P>>,
    version: u64,
}

impl<P> BackStack<P>
where
    P: Clone + PartialEq + fmt::Debug,
{
    /// Creates a back stack from an initial page list. The first page becomes
    /// the immutable root.
    ///
    /// Fails with [`NavError::EmptyPages`] if the list is empty.
    pub fn new(pages: Vec<P>) -> Result<Self, NavError> {
        if pages.is_empty() {
            return Err(NavError::EmptyPages);
        }
        Ok(Self {
            pages,
            saved: Vec::new(),
            version: 0,
        })
    }

    /// Creates a back stack holding only the given root page.
    pub fn with_root(root: P) -> Self {
        Self {
            pages: vec![root],
            saved: Vec::new(),
            version: 0,
        }
    }

    /// Seeds a back stack from a deep-link resolution result.
    ///
    /// An empty result falls back to `[start]`. A result that already begins
    /// with `start` is used as-is; otherwise `start` is placed underneath it
    /// so the root is never duplicated and never missing.
    pub fn seeded(start: P, resolved: Vec<P>) -> Self {
        let mut pages = resolved;
        if pages.first() != Some(&start) {
            pages.insert(0, start);
        }
        Self {
            pages,
            saved: Vec::new(),
            version: 0,
        }
    }

    /// All the pages in the back stack, bottom first.
    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    /// The starting page. This is the bottom page on the stack and can never
    /// be removed.
    pub fn root(&self) -> &P {
        &self.pages[0]
    }

    /// The current page. This is the top page on the stack and is the one
    /// meant to be displayed.
    pub fn current(&self) -> &P {
        &self.pages[self.pages.len() - 1]
    }

    /// A counter bumped on every mutation. External readers can compare
    /// versions to detect change without observing the list itself.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// True if the page is on the live stack or inside any saved stack.
    ///
    /// The rendering layer uses this to decide whether off-stack UI state
    /// held for a page (scroll position, form content) may be discarded.
    pub fn should_retain_external_state(&self, page: &P) -> bool {
        self.pages.contains(page) || self.saved.iter().any(|s| s.contains(page))
    }

    /// Navigates to the given page by pushing it onto the stack.
    ///
    /// Returns true if the back stack was changed.
    pub fn navigate(&mut self, page: P) -> bool {
        self.navigate_with(page, NavOptions::new())
    }

    /// Navigates to the given page, applying the options in order:
    ///
    /// 1. With `restore_state`, pick the saved stack containing `page`, if any.
    /// 2. With `pop_up_to`, truncate above (or at, with `inclusive`) the
    ///    top-most matching page; with `save_state`, detach the sub-stack
    ///    headed by that page into the saved set first.
    /// 3. Reattach the saved stack picked in step 1, dropping its head when
    ///    it duplicates the current page. This replaces the push.
    /// 4. Otherwise push `page`, unless `single_top` is set and `page`
    ///    already equals the current page.
    ///
    /// Returns true if the live stack or the saved set was changed.
    pub fn navigate_with(&mut self, page: P, options: NavOptions<'_, P>) -> bool {
        let mut changed = false;

        // The restore candidate is chosen before any truncation so a stack
        // detached by this same call can never restore onto itself. Step 2
        // only appends to the saved set, so the index stays valid.
        let restore_idx = if options.restore_state {
            self.saved.iter().position(|s| s.contains(&page))
        } else {
            None
        };

        if let Some(predicate) = &options.pop_up_to {
            if let Some(target) = self.pages.iter().rposition(|p| predicate(p)) {
                if options.save_state && self.detach(target) {
                    changed = true;
                }
                // The root page stays even when the predicate matched it
                // inclusively.
                let keep = if options.inclusive && target > 0 {
                    target
                } else {
                    target + 1
                };
                if keep < self.pages.len() {
                    self.pages.truncate(keep);
                    changed = true;
                }
            }
        }

        if let Some(idx) = restore_idx {
            let mut restored = self.saved.remove(idx);
            if restored.first() == Some(self.current()) {
                restored.remove(0);
            }
            self.pages.append(&mut restored);
            changed = true;
        } else if !(options.single_top && self.current() == &page) {
            self.pages.push(page);
            changed = true;
        }

        if changed {
            self.bump();
            debug!(pages = ?self.pages, saved = self.saved.len(), "navigate");
        }
        changed
    }

    /// Pops the top page off the stack. Ignored when only the root page is
    /// left.
    ///
    /// When the page that becomes current heads a saved stack, that stack is
    /// reattached, so popping back onto a page with a detached history
    /// resumes that history.
    ///
    /// Returns true if the back stack was changed.
    pub fn pop(&mut self) -> bool {
        if self.pages.len() <= 1 {
            return false;
        }
        self.pages.pop();
        let restore_idx = self
            .saved
            .iter()
            .position(|s| s.first() == Some(self.current()));
        if let Some(idx) = restore_idx {
            let mut restored = self.saved.remove(idx);
            // The head duplicates the page we just landed on.
            restored.remove(0);
            self.pages.append(&mut restored);
        }
        self.bump();
        debug!(pages = ?self.pages, saved = self.saved.len(), "pop");
        true
    }

    /// Pops all pages except the root and drops every saved stack.
    ///
    /// Returns true if the back stack or the saved set was changed.
    pub fn pop_to_root(&mut self) -> bool {
        let changed = self.pages.len() > 1 || !self.saved.is_empty();
        self.pages.truncate(1);
        self.saved.clear();
        if changed {
            self.bump();
            debug!(pages = ?self.pages, "pop_to_root");
        }
        changed
    }

    /// Replaces the live stack wholesale and drops every saved stack.
    ///
    /// Fails with [`NavError::EmptyPages`] if `pages` is empty and with
    /// [`NavError::RootChanged`] if its first element differs from the
    /// current root; the stack is left untouched on error.
    pub fn set(&mut self, pages: Vec<P>) -> Result<(), NavError> {
        match pages.first() {
            None => return Err(NavError::EmptyPages),
            Some(first) if first != self.root() => return Err(NavError::RootChanged),
            Some(_) => {}
        }
        self.pages = pages;
        self.saved.clear();
        self.bump();
        debug!(pages = ?self.pages, "set");
        Ok(())
    }

    /// Detaches `pages[target..]` into the saved set. Returns true if a
    /// snapshot was stored.
    ///
    /// At most one saved stack may be headed by the root: when the snapshot
    /// starts at the root and a root-headed stack is already saved, the
    /// duplicate root is dropped from the snapshot before storing.
    fn detach(&mut self, target: usize) -> bool {
        let mut snapshot = self.pages[target..].to_vec();
        let root = self.root();
        if snapshot.first() == Some(root) && self.saved.iter().any(|s| s.first() == Some(root)) {
            snapshot.remove(0);
        }
        if snapshot.is_empty() {
            false
        } else {
            self.saved.push(snapshot);
            true
        }
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

impl<P: fmt::Debug> fmt::Debug for BackStack<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackStack")
            .field("pages", &self.pages)
            .field("saved", &self.saved)
            .finish()
    }
}
