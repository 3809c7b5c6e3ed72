//! Compiles one route template into a regex matcher.
//!
//! A template is a path with `{name}` placeholders and `.*` wildcard runs,
//! optionally followed by `?` and query-parameter templates. The path portion
//! must match the deep link's whole path; each declared query key is
//! independently optional, but when the deep link supplies it, its value must
//! match that key's own sub-pattern.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::args::RouteArgs;
use crate::deep_link::{decode, DeepLink};
use crate::error::TemplateError;

/// Matches one `{name}` placeholder inside a template.
static FILL_IN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(.+?)\}").expect("fill-in pattern"));

/// A compiled route template.
///
/// # Examples
///
/// ```
/// use pagenav_router::{DeepLink, RouteMatcher};
///
/// let matcher = RouteMatcher::new("/detail/{id}").unwrap();
/// let args = matcher
///     .match_uri(&DeepLink::parse("https://example.com/detail/1"))
///     .unwrap();
/// assert_eq!(args.get("id"), Some("1"));
///
/// assert!(matcher
///     .match_uri(&DeepLink::parse("https://example.com/other"))
///     .is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RouteMatcher {
    template: String,
    pattern: Regex,
    path_args: Vec<String>,
    query: Vec<(String, ParamQuery)>,
}

/// One query key's compiled sub-pattern and the arguments it captures.
#[derive(Debug, Clone)]
struct ParamQuery {
    pattern: Regex,
    args: Vec<String>,
}

impl RouteMatcher {
    /// Compiles the given parameterized template.
    pub fn new(template: &str) -> Result<Self, TemplateError> {
        let (path_part, query_part) = match template.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (template, None),
        };

        let mut path_args = Vec::new();
        let mut path_regex = String::from("^");
        append_fill_ins(path_part, "(.+?)", &mut path_regex, &mut path_args);
        // Accept either the end of the path or a stray query tail.
        path_regex.push_str(r"(\?.*)?$");
        let pattern = compile(template, &unquote_wildcards(&path_regex))?;

        let mut query = Vec::new();
        if let Some(query_part) = query_part {
            for pair in query_part.split('&').filter(|pair| !pair.is_empty()) {
                let (key, value_template) = pair.split_once('=').unwrap_or((pair, ""));
                let mut args = Vec::new();
                let mut value_regex = String::from("^");
                // Query captures are optional groups so a partially supplied
                // value still matches.
                append_fill_ins(value_template, "(.+?)?", &mut value_regex, &mut args);
                value_regex.push('$');
                let pattern = compile(template, &unquote_wildcards(&value_regex))?;
                query.push((key.to_string(), ParamQuery { pattern, args }));
            }
        }

        Ok(Self {
            template: template.to_string(),
            pattern,
            path_args,
            query,
        })
    }

    /// The template this matcher was compiled from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Matches the given deep link.
    ///
    /// Returns `None` when the path does not match or a supplied query
    /// parameter fails its sub-pattern; otherwise the extracted name→value
    /// map. Query keys the link does not supply are simply absent from the
    /// map.
    pub fn match_uri(&self, link: &DeepLink) -> Option<RouteArgs> {
        let caps = self.pattern.captures(link.path())?;
        let mut values = HashMap::new();
        for (index, name) in self.path_args.iter().enumerate() {
            let captured = caps.get(index + 1)?;
            values.insert(name.clone(), decode(captured.as_str()).into_owned());
        }

        for (key, param) in &self.query {
            let query_caps = match link.query_param(key) {
                Some(supplied) => match param.pattern.captures(supplied) {
                    Some(caps) => Some(caps),
                    None => return None,
                },
                None => None,
            };
            for (index, name) in param.args.iter().enumerate() {
                let Some(captured) = query_caps.as_ref().and_then(|caps| caps.get(index + 1))
                else {
                    continue;
                };
                let value = decode(captured.as_str()).into_owned();
                // An unmatched optional placeholder can echo the template
                // text back; a value that is its own `{name}` is no capture.
                let stripped: String = value.chars().filter(|c| !matches!(c, '{' | '}')).collect();
                if stripped != *name {
                    values.insert(name.clone(), value);
                }
            }
        }

        Some(RouteArgs::new(values))
    }
}

/// Appends the template to `out` with literal runs escaped and every `{name}`
/// placeholder replaced by `group`, recording placeholder names in order.
fn append_fill_ins(template: &str, group: &str, out: &mut String, args: &mut Vec<String>) {
    let mut append_pos = 0;
    for placeholder in FILL_IN.find_iter(template) {
        args.push(template[placeholder.start() + 1..placeholder.end() - 1].to_string());
        out.push_str(&regex::escape(&template[append_pos..placeholder.start()]));
        out.push_str(group);
        append_pos = placeholder.end();
    }
    if append_pos < template.len() {
        out.push_str(&regex::escape(&template[append_pos..]));
    }
}

/// Literal runs are escaped wholesale, which also quotes `.*` wildcard runs;
/// re-open exactly those so they keep matching zero or more characters.
fn unquote_wildcards(pattern: &str) -> String {
    pattern.replace(r"\.\*", ".*")
}

fn compile(template: &str, pattern: &str) -> Result<Regex, TemplateError> {
    Regex::new(pattern).map_err(|source| TemplateError {
        template: template.to_string(),
        source,
    })
}
