pub mod constants;
mod context;
mod cors;
mod header_builder;
mod headers;
mod interop;
mod options;
mod origin;
mod pipeline;
mod policy;
mod result;
mod util;
pub mod vary;

pub use context::{CorsRequest, CorsResponse, RequestContext};
pub use cors::Cors;
pub use headers::Headers;
pub use interop::RouteMethods;
pub use options::{CorsOptions, Origins};
pub use origin::{AllowOrigin, OriginMatcher, PatternError};
pub use pipeline::write_headers;
pub use policy::Policy;
pub use result::CorsError;
