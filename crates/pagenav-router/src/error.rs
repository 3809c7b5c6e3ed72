use thiserror::Error;

/// A captured argument could not populate a page field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// The route matched but a required argument was not captured.
    #[error("missing required argument `{name}`")]
    Missing { name: String },

    /// A captured value failed to parse as the field's declared type.
    #[error("argument `{name}` has value `{value}` which is not a valid {expected}")]
    Parse {
        name: String,
        value: String,
        expected: &'static str,
    },
}

/// A matched route's captured arguments could not build its target page.
///
/// This is a configuration error: the template and the page builder disagree
/// about which arguments exist or what type they carry. It is surfaced to the
/// caller of route resolution and never silently dropped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("route `{template}` could not build its page")]
pub struct RouteBuildError {
    /// The template of the entry that matched.
    pub template: String,
    #[source]
    pub source: ArgError,
}

/// A route template did not compile into a matcher.
#[derive(Debug, Error, Clone)]
#[error("route template `{template}` did not compile")]
pub struct TemplateError {
    pub template: String,
    #[source]
    pub source: regex::Error,
}
