//! Builds validated, percent-encoded URLs from raw strings.

use percent_encoding::{percent_decode_str, utf8_percent_encode};
use tracing::{debug, trace};
use url::Url;

use crate::charset;
use crate::encoder::Encoder;
use crate::error::EncodeUrlError;

/// Convert a string to a percent-encoded, parseable URL.
///
/// With a non-UTF-8 encoder the string is transcoded and byte-escaped in
/// full-URL mode. Otherwise any pre-existing percent-encoding is removed
/// first (failure here fails the whole operation) and the decoded text is
/// re-escaped so that non-ASCII characters cannot break component parsing.
/// Either way the partially encoded string is then split into components and
/// reassembled with component-correct percent-encoding, which corrects any
/// characters the first pass missed and reverts incidental decoding.
///
/// # Examples
///
/// ```
/// use encoded_url::{encoded_url, Encoder};
///
/// let url = encoded_url("http://example.com/~user/index.php?q=test query", None)?;
/// assert_eq!(url.query(), Some("q=test%20query"));
///
/// let sjis = Encoder::from_name("shift_jis").expect("known alias");
/// let url = encoded_url("http://example.com/?q=テスト", Some(&sjis))?;
/// assert_eq!(url.query(), Some("q=%83e%83X%83g"));
/// # Ok::<(), encoded_url::EncodeUrlError>(())
/// ```
pub fn encoded_url(input: &str, encoder: Option<&Encoder>) -> Result<Url, EncodeUrlError> {
    let partial = match encoder {
        // Custom encode the URL if using non-Unicode
        Some(encoder) if !encoder.is_utf8() => encoder.encode(input, true),
        _ => {
            // Remove preexisting encoding,
            let decoded = percent_decode_str(input)
                .decode_utf8()
                .map_err(|_| EncodeUrlError::RemovePercentEncoding)?;
            // then encode any character URLs can't hold anywhere so the
            // component parser doesn't choke
            utf8_percent_encode(&decoded, charset::URL_ALLOWED).to_string()
        }
    };

    // Break into components and reassemble with proper encoding per part
    let url = Url::parse(&partial)?;
    trace!(url = url.as_str(), "built encoded URL");
    Ok(url)
}

/// [`encoded_url`] with the deterministic fallback chain for a candidate
/// encoder.
///
/// Attempts the full pipeline with `encoder`; if any step fails (in practice
/// only when validating against UTF-8 text that cannot round-trip) the whole
/// pipeline is retried once with [`Encoder::invalid`], which keeps UTF-8
/// structure while percent-encoding every byte that doesn't fit. Returns the
/// URL together with the encoder that actually produced it.
///
/// # Panics
///
/// Panics if the retry also fails. The invalid-encoding path performs no
/// character-set restriction beyond raw byte escaping, so for input that was
/// an absolute URL string it cannot fail; reaching the panic means a
/// component-parsing bug, not malformed input.
pub fn encoded_url_with_fallback(input: &str, encoder: &Encoder) -> (Url, Encoder) {
    match encoded_url(input, Some(encoder)) {
        Ok(url) => (url, encoder.clone()),
        Err(err) => {
            // Imitate UTF-8 while continuing to percent-encode every byte
            debug!(
                encoding = %encoder.encoding(),
                %err,
                "URL validation failed, retrying with the invalid encoding"
            );
            let invalid = Encoder::invalid();
            match encoded_url(input, Some(&invalid)) {
                Ok(url) => (url, invalid),
                Err(err) => panic!(
                    "URL validity check failed even with the invalid encoding: {err}"
                ),
            }
        }
    }
}
