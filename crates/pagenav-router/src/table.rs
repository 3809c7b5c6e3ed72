//! An ordered route table for one page family.
//!
//! Entries are declared programmatically through [`RouteTableBuilder`] at
//! startup and are immutable afterwards; a built table is safe to share
//! between stacks for concurrent read-only resolution.

use std::sync::Arc;

use tracing::trace;

use crate::args::RouteArgs;
use crate::deep_link::DeepLink;
use crate::error::{ArgError, RouteBuildError, TemplateError};
use crate::matcher::RouteMatcher;

type PageBuilder<P> = Arc<dyn Fn(&RouteArgs) -> Result<P, ArgError> + Send + Sync>;

/// One (matcher, page builder, root flag) row of a table.
pub struct RouteEntry<P> {
    matcher: RouteMatcher,
    build: PageBuilder<P>,
    is_root: bool,
}

impl<P> RouteEntry<P> {
    /// The template this entry matches.
    pub fn template(&self) -> &str {
        self.matcher.template()
    }

    /// Whether this entry produces the family's root page.
    pub fn is_root(&self) -> bool {
        self.is_root
    }
}

/// Resolves deep links into a page list for one page family,
/// first-match-wins in declaration order.
///
/// A non-root match gets the family's root page synthesized beneath it, so
/// the resulting list seeds a stack whose back button lands on the root. A
/// miss resolves to an empty list; falling back (typically to the bare root
/// page) is the caller's decision.
///
/// # Examples
///
/// ```
/// use pagenav_router::RouteTable;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum HomePage {
///     List,
///     Detail { id: u32 },
/// }
///
/// let table = RouteTable::builder()
///     .root_route("", |_| Ok(HomePage::List))
///     .route("/detail/{id}", |args| {
///         Ok(HomePage::Detail { id: args.parse("id")? })
///     })
///     .build()
///     .unwrap();
///
/// let pages = table.resolve_uri("https://example.com/detail/7").unwrap();
/// assert_eq!(pages, vec![HomePage::List, HomePage::Detail { id: 7 }]);
///
/// assert!(table.resolve_uri("https://example.com/nope").unwrap().is_empty());
/// ```
pub struct RouteTable<P> {
    entries: Vec<RouteEntry<P>>,
}

impl<P> RouteTable<P> {
    pub fn builder() -> RouteTableBuilder<P> {
        RouteTableBuilder { pending: Vec::new() }
    }

    /// The entries in declaration order.
    pub fn entries(&self) -> &[RouteEntry<P>] {
        &self.entries
    }

    /// Resolves a deep link to a page list.
    ///
    /// `Ok(vec![])` means no entry matched; a [`RouteBuildError`] means an
    /// entry matched but its captures could not populate the page.
    pub fn resolve(&self, link: &DeepLink) -> Result<Vec<P>, RouteBuildError> {
        for entry in &self.entries {
            let Some(args) = entry.matcher.match_uri(link) else {
                continue;
            };
            trace!(template = entry.template(), "deep link matched");
            let page = build_page(entry, &args)?;
            if entry.is_root {
                return Ok(vec![page]);
            }
            // A deeper match sits on top of the family's root, if declared.
            return match self.entries.iter().find(|entry| entry.is_root) {
                Some(root) => Ok(vec![build_page(root, &RouteArgs::empty())?, page]),
                None => Ok(vec![page]),
            };
        }
        Ok(Vec::new())
    }

    /// Parses and resolves a URI string. See [`RouteTable::resolve`].
    pub fn resolve_uri(&self, uri: &str) -> Result<Vec<P>, RouteBuildError> {
        self.resolve(&DeepLink::parse(uri))
    }
}

fn build_page<P>(entry: &RouteEntry<P>, args: &RouteArgs) -> Result<P, RouteBuildError> {
    (entry.build)(args).map_err(|source| RouteBuildError {
        template: entry.template().to_string(),
        source,
    })
}

/// Declares routes for one page family before compiling them into a
/// [`RouteTable`].
///
/// A page variant reachable through several paths declares them with
/// [`RouteTableBuilder::routes`]; each template becomes its own entry in
/// declaration order.
pub struct RouteTableBuilder<P> {
    pending: Vec<PendingEntry<P>>,
}

struct PendingEntry<P> {
    templates: Vec<String>,
    build: PageBuilder<P>,
    is_root: bool,
}

impl<P> RouteTableBuilder<P> {
    /// Declares one template building a page from its captures.
    pub fn route(
        self,
        template: &str,
        build: impl Fn(&RouteArgs) -> Result<P, ArgError> + Send + Sync + 'static,
    ) -> Self {
        self.add(&[template], build, false)
    }

    /// Declares several templates that all build the same page variant.
    pub fn routes(
        self,
        templates: &[&str],
        build: impl Fn(&RouteArgs) -> Result<P, ArgError> + Send + Sync + 'static,
    ) -> Self {
        self.add(templates, build, false)
    }

    /// Declares the family's root page template.
    pub fn root_route(
        self,
        template: &str,
        build: impl Fn(&RouteArgs) -> Result<P, ArgError> + Send + Sync + 'static,
    ) -> Self {
        self.add(&[template], build, true)
    }

    /// Declares several templates for the family's root page.
    pub fn root_routes(
        self,
        templates: &[&str],
        build: impl Fn(&RouteArgs) -> Result<P, ArgError> + Send + Sync + 'static,
    ) -> Self {
        self.add(templates, build, true)
    }

    fn add(
        mut self,
        templates: &[&str],
        build: impl Fn(&RouteArgs) -> Result<P, ArgError> + Send + Sync + 'static,
        is_root: bool,
    ) -> Self {
        self.pending.push(PendingEntry {
            templates: templates.iter().map(|t| t.to_string()).collect(),
            build: Arc::new(build),
            is_root,
        });
        self
    }

    /// Compiles every declared template.
    pub fn build(self) -> Result<RouteTable<P>, TemplateError> {
        let mut entries = Vec::new();
        for entry in self.pending {
            for template in &entry.templates {
                entries.push(RouteEntry {
                    matcher: RouteMatcher::new(template)?,
                    build: Arc::clone(&entry.build),
                    is_root: entry.is_root,
                });
            }
        }
        Ok(RouteTable { entries })
    }
}
