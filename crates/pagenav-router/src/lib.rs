//! # pagenav-router
//!
//! Deep-link resolution for page-stack UIs:
//! - [`RouteMatcher`] compiles a path/query template (`/detail/{id}`,
//!   `/search?query={query}`, `.*` wildcards) into a regex matcher that
//!   extracts named, percent-decoded arguments
//! - [`RouteTable`] holds the ordered (matcher, page builder, root flag)
//!   entries for one page family and resolves a URI to a page list,
//!   first-match-wins, synthesizing the family root beneath deeper matches
//! - [`DeepLink`] reduces a URI to the parts matching consults: the path and
//!   flat query pairs; scheme and host are ignored
//!
//! Only the resulting page list crosses into the navigation engine, where it
//! seeds a back stack.
//!
//! ## Example
//!
//! ```
//! use pagenav_router::RouteTable;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum SearchPage {
//!     Main,
//!     Results(String),
//! }
//!
//! let table = RouteTable::builder()
//!     .root_route("/search", |_| Ok(SearchPage::Main))
//!     .route("/search/{query}", |args| {
//!         Ok(SearchPage::Results(args.required("query")?.to_string()))
//!     })
//!     .build()
//!     .unwrap();
//!
//! let pages = table.resolve_uri("https://example.com/search/cats").unwrap();
//! assert_eq!(
//!     pages,
//!     vec![SearchPage::Main, SearchPage::Results("cats".into())]
//! );
//! ```

mod args;
mod deep_link;
mod error;
mod matcher;
mod table;

pub use args::RouteArgs;
pub use deep_link::DeepLink;
pub use error::{ArgError, RouteBuildError, TemplateError};
pub use matcher::RouteMatcher;
pub use table::{RouteEntry, RouteTable, RouteTableBuilder};
