#![allow(dead_code)]

use cors_gate::constants::method;
use cors_gate::{Cors, CorsError, CorsOptions, Headers, Origins, RequestContext};

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins(mut self, origins: impl Into<Origins>) -> Self {
        self.options.origins = origins.into();
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.credentials = enabled;
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options.max_age = Some(seconds);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn request_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.request_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn response_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.response_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options).expect("valid CORS configuration")
    }
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
    host: Option<String>,
    allowed_methods: Option<String>,
}

impl RequestBuilder {
    fn with_method(method: &str) -> Self {
        Self {
            method: method.into(),
            origin: None,
            host: Some("www.example.com".into()),
            allowed_methods: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn without_host(mut self) -> Self {
        self.host = None;
        self
    }

    pub fn allowed_methods(mut self, methods: impl Into<String>) -> Self {
        self.allowed_methods = Some(methods.into());
        self
    }

    pub fn check(self, cors: &Cors) -> Result<Headers, CorsError> {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            host: self.host.as_deref(),
            allowed_methods: self.allowed_methods.as_deref(),
        };
        cors.check(&ctx)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::with_method(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::with_method(method::OPTIONS)
}
