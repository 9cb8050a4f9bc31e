use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::origin::AllowOrigin;
use crate::policy::Policy;

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a Policy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a Policy) -> Self {
        Self { policy }
    }

    pub(crate) fn build_origin_headers(
        &self,
        request: &RequestContext<'_>,
        allow_origin: Option<&AllowOrigin>,
    ) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(2);
        if let Some(allow_origin) = allow_origin {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                allow_origin.header_value(),
            );
        }

        let wildcard = allow_origin.is_some_and(AllowOrigin::is_any);
        if request.origin.is_some() && !wildcard {
            headers.add_vary(header::ORIGIN);
        }
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.policy.credentials() {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = self.policy.expose_headers() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if request.is_preflight()
            && let Some(max_age) = self.policy.max_age()
        {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, max_age.to_string());
        }
        headers
    }

    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if request.is_preflight()
            && let Some(value) = self.policy.allow_headers()
        {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        headers
    }

    /// Configured methods win, otherwise the route's own method list is used.
    pub(crate) fn build_methods_header(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if !request.is_preflight() {
            return headers;
        }

        let methods = self
            .policy
            .allow_methods()
            .or(request.allowed_methods)
            .filter(|methods| !methods.is_empty());
        if let Some(value) = methods {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
