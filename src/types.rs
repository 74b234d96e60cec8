//! Core data structures for character encodings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::registry;

/// Stable numeric identifier for a character encoding.
///
/// The value space is Windows code page numbers (932 = Shift_JIS,
/// 1251 = windows-1251, 65001 = UTF-8, and so on), which are stable across
/// process restarts and platforms. This makes the identifier safe to persist
/// as part of a configuration record, unlike a runtime-assigned enumeration
/// ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodingId(u32);

impl EncodingId {
    /// UTF-8 (code page 65001).
    pub const UTF_8: EncodingId = EncodingId(65001);

    /// The distinguished "invalid" encoding.
    ///
    /// Text tagged with this identifier is treated as UTF-8 for URL structure
    /// purposes, but every non-ASCII byte is percent-encoded because some
    /// bytes could not be represented in a declared encoding. This is a valid
    /// identifier value, not an absence.
    pub const INVALID: EncodingId = EncodingId(0xFFFF_FFFF);

    /// Create an identifier from its raw code page number.
    pub const fn new(raw: u32) -> Self {
        EncodingId(raw)
    }

    /// The raw code page number.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether this identifier names UTF-8.
    pub const fn is_utf8(self) -> bool {
        self.0 == Self::UTF_8.0
    }

    /// Whether this is the distinguished invalid identifier.
    pub const fn is_invalid(self) -> bool {
        self.0 == Self::INVALID.0
    }
}

impl fmt::Display for EncodingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A character encoding with a human-readable name.
///
/// The `name` is a display aid only: two values with the same identifier are
/// interchangeable regardless of name, and equality compares identifiers
/// alone. The serialized form is `{ name, identifier }` with the identifier
/// as its raw code page number, so persisted values stay independent of any
/// runtime encoding registry.
///
/// # Examples
///
/// ```
/// use encoded_url::{CanonicalEncoding, EncodingId};
///
/// let a = CanonicalEncoding::new("shift_jis", EncodingId::new(932));
/// let b = CanonicalEncoding::new("Shift-JIS (Japanese)", EncodingId::new(932));
/// assert_eq!(a, b); // name is display-only
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalEncoding {
    name: String,
    #[serde(rename = "identifier")]
    id: EncodingId,
}

impl CanonicalEncoding {
    /// Create an encoding value from a display name and an identifier.
    pub fn new(name: impl Into<String>, id: EncodingId) -> Self {
        CanonicalEncoding {
            name: name.into(),
            id,
        }
    }

    /// The distinguished invalid encoding.
    ///
    /// Forces UTF-8 byte semantics while percent-encoding everything that is
    /// not plain ASCII.
    pub fn invalid() -> Self {
        CanonicalEncoding::new("invalid utf-8", EncodingId::INVALID)
    }

    /// Create an encoding value from an identifier alone.
    ///
    /// The display name is derived from the standard charset name for the
    /// identifier, or `"unknown"` if none exists.
    pub fn from_id(id: EncodingId) -> Self {
        let name = registry::charset_name(id).unwrap_or("unknown");
        CanonicalEncoding::new(name, id)
    }

    /// The human-readable name. Mainly used for display.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stable identifier.
    pub fn id(&self) -> EncodingId {
        self.id
    }

    /// Whether this encoding is UTF-8.
    pub fn is_utf8(&self) -> bool {
        self.id.is_utf8()
    }
}

impl PartialEq for CanonicalEncoding {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CanonicalEncoding {}

impl fmt::Display for CanonicalEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One query pair extracted from a URL, in document order.
///
/// Values keep or drop percent-encoding depending on which accessor produced
/// them; see [`crate::query::query_items`]. Displaying an item reproduces its
/// query segment exactly: `name=value`, or just `name` when the segment
/// carried no `=` at all, which is distinct from an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryItem {
    /// The key side of the pair.
    pub name: String,
    /// The value side of the pair, `None` if the segment had no `=`.
    pub value: Option<String>,
}

impl fmt::Display for QueryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => write!(f, "{}", self.name),
        }
    }
}
