#![allow(dead_code)]

use super::headers::vary_values;
use cors_gate::{CorsError, Headers};
use std::collections::HashSet;

pub fn assert_admitted(result: Result<Headers, CorsError>) -> Headers {
    match result {
        Ok(headers) => headers,
        Err(err) => panic!("expected request to be admitted, got {err:?}"),
    }
}

pub fn assert_denied(result: Result<Headers, CorsError>) -> CorsError {
    match result {
        Ok(headers) => panic!("expected access denied, got headers {headers:?}"),
        Err(err) => err,
    }
}

pub fn assert_vary_eq<I, S>(headers: &Headers, expected: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let expected: HashSet<String> = expected
        .into_iter()
        .map(|entry| entry.into().to_ascii_lowercase())
        .collect();
    assert_eq!(vary_values(headers), expected);
}
