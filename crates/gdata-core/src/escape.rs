//! Percent-escaping rules shared by query and path encoding.
//!
//! GData endpoints expect standard component escaping: everything
//! outside the unreserved set (`A-Z a-z 0-9 - _ . ~`) is escaped,
//! and a space renders as `%20`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in query keys/values and in path tokens.
///
/// `NON_ALPHANUMERIC` minus the RFC 3986 unreserved marks.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-escape a single URL component.
#[must_use]
pub fn escape_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::escape_component;

    #[test]
    fn alphanumerics_pass_through() {
        assert_eq!(escape_component("abc123"), "abc123");
    }

    #[test]
    fn unreserved_marks_pass_through() {
        assert_eq!(escape_component("a-b_c.d~e"), "a-b_c.d~e");
    }

    #[test]
    fn space_becomes_percent_20() {
        assert_eq!(escape_component("pro wolf"), "pro%20wolf");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(escape_component("a|b"), "a%7Cb");
        assert_eq!(escape_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(escape_component("a/b?c"), "a%2Fb%3Fc");
    }

    #[test]
    fn multibyte_input_is_escaped_per_byte() {
        assert_eq!(escape_component("café"), "caf%C3%A9");
    }
}
