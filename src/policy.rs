use crate::options::{CorsOptions, Origins};
use crate::origin::{AllowOrigin, OriginMatcher, PatternError};

const LIST_SEPARATOR: &str = ", ";

/// Compiled, immutable form of [`CorsOptions`].
///
/// Every derived value is computed once here and only read per request.
#[derive(Clone, Debug)]
pub struct Policy {
    matcher: Option<OriginMatcher>,
    credentials: bool,
    max_age: Option<u64>,
    allow_methods: Option<String>,
    allow_headers: Option<String>,
    expose_headers: Option<String>,
}

impl Policy {
    pub fn compile(options: CorsOptions) -> Result<Self, PatternError> {
        let matcher = match &options.origins {
            Origins::Any => None,
            Origins::List(specifiers) => Some(OriginMatcher::compile(specifiers)?),
        };

        Ok(Self {
            matcher,
            credentials: options.credentials,
            max_age: options.max_age,
            allow_methods: join_list(&options.methods),
            allow_headers: join_list(&options.request_headers),
            expose_headers: join_list(&options.response_headers),
        })
    }

    /// Picks the value for `Access-Control-Allow-Origin`, or `None` to deny.
    pub fn resolve_allow_origin(&self, origin: Option<&str>) -> Option<AllowOrigin> {
        if let Some(matcher) = &self.matcher {
            origin
                .and_then(|origin| matcher.find(origin))
                .map(|matched| AllowOrigin::Origin(matched.to_owned()))
        } else if self.credentials {
            // `*` is rejected by browsers for credentialed requests.
            origin.map(|origin| AllowOrigin::Origin(origin.to_owned()))
        } else {
            Some(AllowOrigin::Any)
        }
    }

    pub fn matcher(&self) -> Option<&OriginMatcher> {
        self.matcher.as_ref()
    }

    pub fn credentials(&self) -> bool {
        self.credentials
    }

    pub fn max_age(&self) -> Option<u64> {
        self.max_age
    }

    pub fn allow_methods(&self) -> Option<&str> {
        self.allow_methods.as_deref()
    }

    pub fn allow_headers(&self) -> Option<&str> {
        self.allow_headers.as_deref()
    }

    pub fn expose_headers(&self) -> Option<&str> {
        self.expose_headers.as_deref()
    }
}

fn join_list(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(LIST_SEPARATOR))
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
