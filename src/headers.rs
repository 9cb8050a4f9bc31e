use crate::constants::header;
use crate::vary;
use indexmap::IndexMap;

/// Response headers in emission order.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(8)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(&value);
        } else {
            self.headers.insert(name.to_string(), value);
        }
    }

    pub(crate) fn add_vary(&mut self, value: &str) {
        match vary::merge(self.headers.get(header::VARY).map(String::as_str), value) {
            Some(merged) => {
                self.headers.insert(header::VARY.to_string(), merged);
            }
            None => {
                self.headers.shift_remove(header::VARY);
            }
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(&name, value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
