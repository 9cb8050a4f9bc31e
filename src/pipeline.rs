use crate::constants::header;
use crate::context::CorsResponse;
use crate::headers::Headers;
use crate::vary;

/// Writes composed headers into `response`, merging `Vary` with what is already there.
pub fn write_headers<R: CorsResponse + ?Sized>(response: &mut R, headers: &Headers) {
    for (name, value) in headers {
        if name.eq_ignore_ascii_case(header::VARY) {
            vary::append(response, value);
        } else {
            response.set_header(name, value);
        }
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
