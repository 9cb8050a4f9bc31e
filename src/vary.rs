//! Merging of `Vary` header values.

use crate::constants::{WILDCARD, header};
use crate::context::CorsResponse;

/// Adds the comma-separated `field` list to an existing `Vary` value.
///
/// Existing entries keep their order and spelling, duplicates are compared
/// case-insensitively and `*` absorbs every other entry. Returns `None` when
/// both sides are empty.
pub fn merge(existing: Option<&str>, field: &str) -> Option<String> {
    let mut entries: Vec<&str> = Vec::new();
    let incoming = existing.into_iter().chain(std::iter::once(field));

    for entry in incoming.flat_map(|value| value.split(',')) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        if entry == WILDCARD {
            return Some(WILDCARD.to_string());
        }
        if !entries
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(entry))
        {
            entries.push(entry);
        }
    }

    if entries.is_empty() {
        None
    } else {
        Some(entries.join(", "))
    }
}

/// Appends `field` to the response's `Vary` header without clobbering it.
pub fn append<R: CorsResponse + ?Sized>(response: &mut R, field: &str) {
    let merged = {
        let existing = response.header(header::VARY);
        let existing = existing.as_deref();
        merge(existing, field).filter(|value| existing != Some(value.as_str()))
    };

    if let Some(value) = merged {
        response.set_header(header::VARY, &value);
    }
}

#[cfg(test)]
#[path = "vary_test.rs"]
mod vary_test;
