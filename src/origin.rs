use crate::constants::WILDCARD;
use regex_automata::meta::{BuildError, Regex};
use std::borrow::Cow;
use thiserror::Error;

const SUBDOMAIN_MARKER: &str = "*.";
const SCHEME_WILDCARD: &str = "*://";
const REQUIRED_SUBDOMAIN: &str = r".+\.";
const OPTIONAL_SUBDOMAIN: &str = r"(?:.+\.)?";
const ANY_SCHEME: &str = r"[A-Za-z][A-Za-z0-9+.\-]*";
const SCHEME_SEPARATOR: &str = "://";

const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Errors raised while compiling configured origin specifiers.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
}

/// Value reflected in `Access-Control-Allow-Origin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowOrigin {
    Any,
    Origin(String),
}

impl AllowOrigin {
    pub fn header_value(&self) -> Cow<'_, str> {
        match self {
            AllowOrigin::Any => Cow::Borrowed(WILDCARD),
            AllowOrigin::Origin(value) => Cow::Borrowed(value.as_str()),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, AllowOrigin::Any)
    }
}

/// Anchored disjunction of every configured origin specifier.
#[derive(Clone, Debug)]
pub struct OriginMatcher {
    regex: Regex,
}

impl OriginMatcher {
    pub fn compile<I, S>(specifiers: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fragments = specifiers
            .into_iter()
            .map(|specifier| to_pattern(specifier.as_ref()))
            .collect::<Vec<_>>();
        let pattern = format!("^(?:{})$", fragments.join("|"));

        let regex = Regex::new(&pattern).map_err(|err| PatternError::Build(Box::new(err)))?;
        tracing::trace!(%pattern, specifiers = fragments.len(), "compiled origin matcher");

        Ok(Self { regex })
    }

    /// Returns the text matched by the pattern, which is the entire origin.
    pub fn find<'o>(&self, origin: &'o str) -> Option<&'o str> {
        if origin.len() > MAX_ORIGIN_LENGTH {
            return None;
        }
        self.regex.find(origin).map(|found| &origin[found.range()])
    }

    pub fn matches(&self, origin: &str) -> bool {
        self.find(origin).is_some()
    }
}

/// Converts one origin specifier into a regex fragment.
///
/// `*://` stands for any scheme. `*.` needs at least one subdomain label,
/// a bare `*` accepts a subdomain or nothing. A specifier that opens with a
/// bare `*` and names no scheme matches under any scheme.
pub(crate) fn to_pattern(specifier: &str) -> String {
    if let Some(rest) = specifier.strip_prefix(SCHEME_WILDCARD) {
        return format!("{ANY_SCHEME}://{}", to_pattern(rest));
    }

    let (separator, replacement) = if specifier.contains(SUBDOMAIN_MARKER) {
        (SUBDOMAIN_MARKER, REQUIRED_SUBDOMAIN)
    } else {
        (WILDCARD, OPTIONAL_SUBDOMAIN)
    };

    let pattern = specifier
        .split(separator)
        .map(regex_syntax::escape)
        .collect::<Vec<_>>()
        .join(replacement);

    // A leading bare `*` without a scheme also stands in for `scheme://`.
    if separator == WILDCARD
        && specifier.starts_with(WILDCARD)
        && !specifier.contains(SCHEME_SEPARATOR)
    {
        format!("(?:{ANY_SCHEME}://)?{pattern}")
    } else {
        pattern
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
