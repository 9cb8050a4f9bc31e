const SCHEME_SEPARATOR: &str = "://";

pub(crate) fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}

/// `https://www.foo.com` becomes `www.foo.com`. Values without a scheme are returned as is.
pub(crate) fn strip_scheme(origin: &str) -> &str {
    match origin.split_once(SCHEME_SEPARATOR) {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => origin,
    }
}

fn is_scheme(value: &str) -> bool {
    let mut bytes = value.bytes();
    bytes.next().is_some_and(|first| first.is_ascii_alphabetic())
        && bytes.all(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'-' | b'.'))
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
