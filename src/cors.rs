use crate::context::{CorsRequest, CorsResponse, RequestContext};
use crate::header_builder::HeaderBuilder;
use crate::headers::{HeaderCollection, Headers};
use crate::options::CorsOptions;
use crate::origin::{AllowOrigin, PatternError};
use crate::pipeline::write_headers;
use crate::policy::Policy;
use crate::result::CorsError;
use crate::util::{equals_ignore_case, strip_scheme};

/// Core CORS admission engine built once from [`CorsOptions`].
///
/// A `Cors` holds no per-request state and can be shared freely across threads.
#[derive(Clone, Debug)]
pub struct Cors {
    policy: Policy,
}

impl Cors {
    pub fn new(options: impl Into<CorsOptions>) -> Result<Self, PatternError> {
        let policy = Policy::compile(options.into())?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn allow_origin<R: CorsRequest + ?Sized>(&self, request: &R) -> Option<AllowOrigin> {
        let ctx = RequestContext::from_request(request);
        self.policy.resolve_allow_origin(ctx.origin)
    }

    /// Decides admission and composes the response headers without touching any response.
    pub fn check<R: CorsRequest + ?Sized>(&self, request: &R) -> Result<Headers, CorsError> {
        let ctx = RequestContext::from_request(request);
        let allow_origin = self.admit(&ctx)?;
        Ok(self.compose(&ctx, allow_origin.as_ref()))
    }

    /// Runs the gate for one request.
    ///
    /// `Ok(())` means the pipeline should continue. On denial nothing is written
    /// to `response`.
    pub fn apply<Req, Res>(&self, request: &Req, response: &mut Res) -> Result<(), CorsError>
    where
        Req: CorsRequest + ?Sized,
        Res: CorsResponse + ?Sized,
    {
        let headers = self.check(request)?;
        write_headers(response, &headers);
        Ok(())
    }

    fn admit(&self, ctx: &RequestContext<'_>) -> Result<Option<AllowOrigin>, CorsError> {
        let allow_origin = self.policy.resolve_allow_origin(ctx.origin);

        if let Some(origin) = ctx.origin
            && allow_origin.is_none()
            && !is_same_host(origin, ctx.host)
        {
            tracing::debug!(
                origin,
                host = ctx.host.unwrap_or_default(),
                "cross-origin access denied"
            );
            return Err(CorsError::AccessDenied {
                origin: origin.to_owned(),
            });
        }

        Ok(allow_origin)
    }

    fn compose(&self, ctx: &RequestContext<'_>, allow_origin: Option<&AllowOrigin>) -> Headers {
        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = HeaderCollection::new();

        headers.extend(builder.build_origin_headers(ctx, allow_origin));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());
        headers.extend(builder.build_max_age_header(ctx));
        headers.extend(builder.build_allowed_headers(ctx));
        headers.extend(builder.build_methods_header(ctx));

        headers.into_headers()
    }
}

fn is_same_host(origin: &str, host: Option<&str>) -> bool {
    host.is_some_and(|host| equals_ignore_case(host, strip_scheme(origin)))
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
