use crate::constants::WILDCARD;
use serde::Deserialize;

/// Origins admitted by a policy.
///
/// `Any` answers every request with `Access-Control-Allow-Origin: *` (or the
/// requesting origin when credentials are enabled). `List` holds origin
/// specifiers that may contain `*` wildcards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "OriginsRepr")]
pub enum Origins {
    #[default]
    Any,
    List(Vec<String>),
}

impl Origins {
    pub fn any() -> Self {
        Self::Any
    }

    /// A specifier that is exactly `*` switches the whole list to [`Origins::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.iter().any(|value| value == WILDCARD) {
            Self::Any
        } else {
            Self::List(values)
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl From<&str> for Origins {
    fn from(value: &str) -> Self {
        Self::list([value])
    }
}

impl From<String> for Origins {
    fn from(value: String) -> Self {
        Self::list([value])
    }
}

impl From<Vec<String>> for Origins {
    fn from(values: Vec<String>) -> Self {
        Self::list(values)
    }
}

impl<const N: usize> From<[&str; N]> for Origins {
    fn from(values: [&str; N]) -> Self {
        Self::list(values)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OriginsRepr {
    One(String),
    Many(Vec<String>),
}

impl From<OriginsRepr> for Origins {
    fn from(repr: OriginsRepr) -> Self {
        match repr {
            OriginsRepr::One(value) => Self::from(value),
            OriginsRepr::Many(values) => Self::list(values),
        }
    }
}

/// Static configuration for a [`Cors`](crate::Cors) instance.
///
/// Deserializes from a bare origin string, a list of origins, or a record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "OptionsRepr")]
pub struct CorsOptions {
    pub origins: Origins,
    pub credentials: bool,
    /// Seconds a preflight answer may be cached.
    pub max_age: Option<u64>,
    pub methods: Vec<String>,
    pub request_headers: Vec<String>,
    pub response_headers: Vec<String>,
}

impl From<Origins> for CorsOptions {
    fn from(origins: Origins) -> Self {
        Self {
            origins,
            ..Self::default()
        }
    }
}

impl From<&str> for CorsOptions {
    fn from(value: &str) -> Self {
        Origins::from(value).into()
    }
}

impl From<String> for CorsOptions {
    fn from(value: String) -> Self {
        Origins::from(value).into()
    }
}

impl From<Vec<String>> for CorsOptions {
    fn from(values: Vec<String>) -> Self {
        Origins::from(values).into()
    }
}

impl<const N: usize> From<[&str; N]> for CorsOptions {
    fn from(values: [&str; N]) -> Self {
        Origins::from(values).into()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OptionsRepr {
    Origins(Origins),
    Record(OptionsRecord),
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct OptionsRecord {
    origins: Origins,
    credentials: bool,
    #[serde(alias = "maxAge")]
    max_age: Option<u64>,
    methods: Vec<String>,
    #[serde(alias = "requestHeaders")]
    request_headers: Vec<String>,
    #[serde(alias = "responseHeaders")]
    response_headers: Vec<String>,
}

impl From<OptionsRepr> for CorsOptions {
    fn from(repr: OptionsRepr) -> Self {
        match repr {
            OptionsRepr::Origins(origins) => origins.into(),
            OptionsRepr::Record(record) => Self {
                origins: record.origins,
                credentials: record.credentials,
                max_age: record.max_age,
                methods: record.methods,
                request_headers: record.request_headers,
                response_headers: record.response_headers,
            },
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
