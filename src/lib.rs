//! Text transcoding and URL percent-encoding.
//!
//! This crate turns arbitrary Unicode strings into syntactically valid,
//! percent-encoded URLs, optionally transcoding the text into a legacy
//! single- or multi-byte character encoding first (Shift-JIS, windows-1251,
//! Big5, ...). Human-typed encoding names are resolved through a large alias
//! table mirroring the WHATWG Encoding Standard, and a deterministic fallback
//! chain guarantees a usable URL is always produced, even when the target
//! encoding cannot represent the input.
//!
//! # Features
//!
//! - **Name resolution**: `"shift_jis"`, `"SJIS"`, and `"MS_Kanji"` all
//!   resolve to the same stable identifier; unknown names are an absent
//!   result, never an error
//! - **Position-aware escaping**: encoding a bare query term escapes down to
//!   the characters safe in every URL component; encoding a whole URL only
//!   escapes characters allowed nowhere
//! - **Total fallback**: unrepresentable text degrades to percent-encoded
//!   UTF-8 bytes, and a URL that cannot round-trip through UTF-8 is tagged
//!   with the distinguished invalid encoding instead of failing
//! - **Stable persistence**: encodings serialize as a name plus a raw code
//!   page number, independent of any runtime registry
//!
//! # Quick Start
//!
//! ```
//! use encoded_url::{encoded_url, update_encoding, Encoder};
//!
//! // Resolve a human-typed encoding name
//! let encoder = Encoder::from_name("shift_jis").expect("known alias");
//!
//! // Build a valid URL, transcoding the non-ASCII query text
//! let url = encoded_url("http://example.com/search?q=テスト", Some(&encoder))?;
//! assert_eq!(url.as_str(), "http://example.com/search?q=%83e%83X%83g");
//!
//! // Switching the URL to UTF-8 can't round-trip those bytes, so the result
//! // is tagged with the invalid encoding and every byte is kept
//! let update = update_encoding(Some(&Encoder::utf8()), Some(&encoder), &url, false);
//! assert!(update.changed);
//! assert!(update.encoder.unwrap().encoding().id().is_invalid());
//! # Ok::<(), encoded_url::EncodeUrlError>(())
//! ```
//!
//! # Error Handling
//!
//! Name resolution failures surface as `None`. Transcoding failures are
//! recovered internally by a UTF-8 byte fallback and are only observable
//! through the coordinator's bookkeeping. URL assembly failures are
//! [`EncodeUrlError`]; the once-per-call retry with the invalid encoding in
//! [`encoded_url_with_fallback`] makes a second failure a programming error,
//! reported by panic.

// Re-export the encoder and name resolution
pub use encoder::Encoder;
pub use registry::{charset_name, encoding_for_id, resolve};

// Re-export URL building and the update coordinator
pub use builder::{encoded_url, encoded_url_with_fallback};
pub use update::{update_encoding, EncodingUpdate};

// Re-export query extraction
pub use query::{query_items, query_string};

// Re-export public types
pub use error::EncodeUrlError;
pub use types::{CanonicalEncoding, EncodingId, QueryItem};

// Module declarations
pub mod builder;
pub mod charset;
pub mod encoder;
pub mod error;
pub mod query;
pub mod registry;
pub mod types;
pub mod update;
