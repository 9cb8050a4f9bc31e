#![allow(dead_code)]

use cors_gate::constants::header;
use cors_gate::{CorsResponse, Headers};
use std::collections::HashSet;

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .get_index_of(name)
        .or_else(|| headers.keys().position(|key| key.eq_ignore_ascii_case(name)))
        .and_then(|index| headers.get_index(index))
        .map(|(_, value)| value.as_str())
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    CorsResponse::header(headers, name).is_some()
}

pub fn header_names(headers: &Headers) -> Vec<&str> {
    headers.keys().map(String::as_str).collect()
}

/// Vary entries lowercased, so membership checks ignore spelling.
pub fn vary_values(headers: &Headers) -> HashSet<String> {
    header_value(headers, header::VARY)
        .into_iter()
        .flat_map(|value| value.split(','))
        .map(|entry| entry.trim().to_ascii_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}
