//! Percent-encodes a UTF-8 string into another character encoding.

use std::borrow::Cow;

use percent_encoding::{percent_encode, AsciiSet};
use tracing::{debug, trace};

use crate::charset;
use crate::registry;
use crate::types::{CanonicalEncoding, EncodingId};

/// Transcodes text to a target character encoding and percent-encodes the
/// resulting bytes.
///
/// An `Encoder` wraps exactly one [`CanonicalEncoding`] and is immutable once
/// constructed. All four constructors produce the same invariant: a fully
/// resolved encoding value.
///
/// # Examples
///
/// ```
/// use encoded_url::Encoder;
///
/// let encoder = Encoder::from_name("shift_jis").expect("known alias");
/// assert_eq!(encoder.encode("テスト", false), "%83e%83X%83g");
///
/// // Unknown names are an absent result, not an error
/// assert!(Encoder::from_name("klingon").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoder {
    encoding: CanonicalEncoding,
}

impl Encoder {
    /// Create an encoder from an existing encoding value.
    pub fn new(encoding: CanonicalEncoding) -> Self {
        Encoder { encoding }
    }

    /// Create an encoder from a common name of the encoding.
    ///
    /// The caller's name is kept for display. Returns `None` if the name
    /// resolves to nothing.
    pub fn from_name(name: &str) -> Option<Self> {
        let id = registry::resolve(name)?;
        Some(Encoder::new(CanonicalEncoding::new(name, id)))
    }

    /// Create an encoder from a stable identifier.
    ///
    /// Always succeeds; the display name is the standard charset name for
    /// the identifier, or `"unknown"` if none exists.
    pub fn from_id(id: EncodingId) -> Self {
        Encoder::new(CanonicalEncoding::from_id(id))
    }

    /// Create an encoder from a vendor code page number.
    ///
    /// The code is widened to the identifier form first, then treated as in
    /// [`Encoder::from_id`].
    pub fn from_code_page(code_page: u16) -> Self {
        Encoder::from_id(EncodingId::new(code_page as u32))
    }

    /// A UTF-8 encoder.
    pub fn utf8() -> Self {
        Encoder::from_id(EncodingId::UTF_8)
    }

    /// The encoder for the distinguished invalid encoding.
    ///
    /// Encodes UTF-8 bytes while percent-encoding everything outside the
    /// selected legal set; used as the terminal fallback when a declared
    /// encoding cannot represent the text.
    pub fn invalid() -> Self {
        Encoder::new(CanonicalEncoding::invalid())
    }

    /// The wrapped encoding value.
    pub fn encoding(&self) -> &CanonicalEncoding {
        &self.encoding
    }

    /// Whether this encoder's encoding is UTF-8.
    pub fn is_utf8(&self) -> bool {
        self.encoding.is_utf8()
    }

    /// Encode a string, percent-escaping everything outside the URL-legal
    /// character set.
    ///
    /// For a UTF-8 encoder the input is returned unchanged; percent-encoding
    /// UTF-8 text is the URL builder's job. Otherwise the input is transcoded
    /// to the target encoding and the bytes are walked one at a time: bytes
    /// that read as a legal ASCII character are emitted as-is, everything
    /// else becomes an uppercase `%XX` escape.
    ///
    /// If any character is unrepresentable in the target encoding the whole
    /// transcode is abandoned (no per-character substitution) and the UTF-8
    /// bytes of the original string are escaped instead, so the result is
    /// always usable downstream.
    ///
    /// # Arguments
    ///
    /// * `input` - The string to encode.
    /// * `full_url` - When `false`, only characters safe in every URL
    ///   component survive unescaped. When `true`, the input represents a
    ///   whole URL: characters allowed in at least one component survive, and
    ///   existing `%` escapes are left alone for a later component-splitting
    ///   step to sort out.
    pub fn encode(&self, input: &str, full_url: bool) -> String {
        // Don't bother with any of this if the encoding is already UTF-8
        if self.is_utf8() {
            trace!("no character encoding required for UTF-8");
            return input.to_string();
        }

        let bytes: Cow<[u8]> = match registry::encoding_for_id(self.encoding.id()) {
            Some(encoding) => {
                let (encoded, _, had_unmappable) = encoding.encode(input);
                if had_unmappable {
                    // The whole attempt fails; continue with UTF-8 bytes so
                    // the component parser downstream never sees raw text
                    debug!(
                        encoding = %self.encoding,
                        "input not representable, falling back to UTF-8"
                    );
                    Cow::Borrowed(input.as_bytes())
                } else {
                    trace!(encoding = %self.encoding, "transcoded input");
                    encoded
                }
            }
            // No transcoder for this identifier (invalid sentinel, UTF-16/32,
            // ISO-2022-KR family); UTF-8 bytes stand in
            None => Cow::Borrowed(input.as_bytes()),
        };

        let legal: &'static AsciiSet = if full_url {
            charset::URL_ALLOWED_PLUS_PERCENT
        } else {
            charset::URL_SAFE
        };

        percent_encode(&bytes, legal).to_string()
    }
}
