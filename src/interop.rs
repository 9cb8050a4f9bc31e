//! Adapters between the engine's traits and the `http` crate types.

use crate::constants::header;
use crate::context::{CorsRequest, CorsResponse};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Method, Request, Response};
use std::borrow::Cow;

/// Request extension carrying the methods the matched route implements.
///
/// Routers insert it before the gate runs so preflight answers can fall back
/// to it when no methods are configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMethods(String);

impl RouteMethods {
    pub fn new(methods: impl Into<String>) -> Self {
        Self(methods.into())
    }

    pub fn from_methods<'m, I>(methods: I) -> Self
    where
        I: IntoIterator<Item = &'m Method>,
    {
        let joined = methods
            .into_iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<B> CorsRequest for Request<B> {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    fn host(&self) -> Option<&str> {
        CorsRequest::header(self, header::HOST)
            .or_else(|| self.uri().authority().map(|authority| authority.as_str()))
    }

    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn allowed_methods(&self) -> Option<&str> {
        self.extensions().get::<RouteMethods>().map(RouteMethods::as_str)
    }
}

impl CorsResponse for HeaderMap {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        let values = self
            .get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>();

        match values.as_slice() {
            [] => None,
            [single] => Some(Cow::Borrowed(*single)),
            many => Some(Cow::Owned(many.join(", "))),
        }
    }

    fn set_header(&mut self, name: &str, value: &str) {
        let parsed = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        );
        match parsed {
            (Ok(name), Ok(value)) => {
                self.insert(name, value);
            }
            _ => tracing::warn!(name, value, "skipping header that is not valid HTTP"),
        }
    }
}

impl<B> CorsResponse for Response<B> {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        CorsResponse::header(self.headers(), name)
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.headers_mut().set_header(name, value);
    }
}

#[cfg(test)]
#[path = "interop_test.rs"]
mod interop_test;
