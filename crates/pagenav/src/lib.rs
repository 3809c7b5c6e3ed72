//! # pagenav
//!
//! A navigation engine for page-stack-based UIs:
//! - An opinionated [`BackStack`] that always keeps a root page and supports
//!   conditional truncation (`pop_up_to`), single-top dedupe, and detaching /
//!   restoring whole sub-stacks so tabbed UIs can preserve each tab's history
//! - A [`Navigator`] that derives transition metadata (which page renders on
//!   top during a cross-fade, which pages can have their UI state evicted)
//!   from page-list changes
//!
//! Deep-link resolution into a page list lives in the companion
//! `pagenav-router` crate; a resolved list seeds a stack via
//! [`BackStack::seeded`].
//!
//! ## Example
//!
//! ```
//! use pagenav::{BackStack, NavOptions};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Page {
//!     Search,
//!     Home,
//!     Settings,
//! }
//!
//! let mut stack = BackStack::with_root(Page::Home);
//!
//! // Switch to the Search tab, detaching nothing yet.
//! stack.navigate_with(
//!     Page::Search,
//!     NavOptions::new()
//!         .pop_up_to(|p| *p == Page::Home)
//!         .save_state(true)
//!         .single_top(true)
//!         .restore_state(true),
//! );
//! assert_eq!(stack.current(), &Page::Search);
//! ```

mod back_stack;
mod error;
mod navigator;

pub use back_stack::{BackStack, NavOptions};
pub use error::NavError;
pub use navigator::{transition_ordering, Navigator, PageChange, TransitionOrdering};
