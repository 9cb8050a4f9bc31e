use crate::constants::{header, method};
use crate::headers::Headers;
use std::borrow::Cow;

/// Read access to the inbound request the engine needs.
pub trait CorsRequest {
    fn header(&self, name: &str) -> Option<&str>;

    /// Target host without scheme, usually the `Host` header.
    fn host(&self) -> Option<&str>;

    fn method(&self) -> &str;

    /// Comma-joined methods the matched route supports.
    fn allowed_methods(&self) -> Option<&str>;
}

/// Header sink the composed CORS headers are written into.
pub trait CorsResponse {
    fn header(&self, name: &str) -> Option<Cow<'_, str>>;

    fn set_header(&mut self, name: &str, value: &str);
}

/// Borrowed view of a single request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub host: Option<&'a str>,
    pub allowed_methods: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// Captures the fields the engine reads. An empty `Origin` counts as absent.
    pub fn from_request<R: CorsRequest + ?Sized>(request: &'a R) -> Self {
        Self {
            method: request.method(),
            origin: request.header(header::ORIGIN).filter(|origin| !origin.is_empty()),
            host: request.host(),
            allowed_methods: request.allowed_methods(),
        }
    }

    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
    }
}

impl CorsRequest for RequestContext<'_> {
    fn header(&self, name: &str) -> Option<&str> {
        if name.eq_ignore_ascii_case(header::ORIGIN) {
            self.origin
        } else if name.eq_ignore_ascii_case(header::HOST) {
            self.host
        } else {
            None
        }
    }

    fn host(&self) -> Option<&str> {
        self.host
    }

    fn method(&self) -> &str {
        self.method
    }

    fn allowed_methods(&self) -> Option<&str> {
        self.allowed_methods
    }
}

impl CorsResponse for Headers {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| Cow::Borrowed(value.as_str()))
    }

    fn set_header(&mut self, name: &str, value: &str) {
        match self.keys().position(|key| key.eq_ignore_ascii_case(name)) {
            Some(index) => {
                if let Some((_, existing)) = self.get_index_mut(index) {
                    *existing = value.to_owned();
                }
            }
            None => {
                self.insert(name.to_owned(), value.to_owned());
            }
        }
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
