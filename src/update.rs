//! Decides whether and how a URL is re-encoded when its encoding changes.

use tracing::debug;
use url::Url;

use crate::builder::encoded_url_with_fallback;
use crate::encoder::Encoder;

/// Outcome of [`update_encoding`], for the caller to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingUpdate {
    /// The encoder that should be kept: the candidate, the invalid encoding
    /// if the fallback chain triggered, or the previous encoder on a no-op.
    pub encoder: Option<Encoder>,
    /// The re-encoded URL, or the original URL on a no-op.
    pub url: Url,
    /// Whether the requested encoding differs from the previous one. Always
    /// `false` when `allow_nil_encoder` was set, as that path only probes
    /// URL validity and must not look like a commit.
    pub changed: bool,
}

/// Re-encode a URL under a candidate encoding, reporting what changed.
///
/// The decision table:
///
/// - `allow_nil_encoder` with no candidate substitutes a UTF-8 encoder, so a
///   URL's current state can be validated without assigning an encoding.
/// - No working encoder after substitution: nothing happens; the previous
///   encoder and original URL come back with `changed = false`.
/// - Without `allow_nil_encoder`, a candidate whose identifier equals the
///   previous one is a no-op.
/// - Otherwise the URL string is percent-encoded under the working encoding
///   and validated through the fallback chain of
///   [`encoded_url_with_fallback`]. The encoder that actually produced a
///   valid URL is returned; `changed` is set when the candidate differs from
///   the previous encoder and this was not a validation probe, even if the
///   fallback ended up producing the URL under the invalid encoding.
///
/// # Examples
///
/// ```
/// use encoded_url::{update_encoding, Encoder};
/// use url::Url;
///
/// let url = Url::parse("http://example.com/?q=test").unwrap();
/// let sjis = Encoder::from_name("shift_jis").expect("known alias");
///
/// let update = update_encoding(Some(&sjis), None, &url, false);
/// assert!(update.changed);
/// assert_eq!(update.encoder.unwrap().encoding().id().raw(), 932);
/// ```
pub fn update_encoding(
    candidate: Option<&Encoder>,
    previous: Option<&Encoder>,
    url: &Url,
    allow_nil_encoder: bool,
) -> EncodingUpdate {
    // Update encoding even if nil: a non-UTF-8 URL probed with no encoding
    // will come back tagged invalid
    let working = match candidate {
        Some(encoder) => Some(encoder.clone()),
        None if allow_nil_encoder => Some(Encoder::utf8()),
        None => None,
    };

    // Only proceed with an encoder; we never delete a previous encoding here
    let Some(working) = working else {
        return EncodingUpdate {
            encoder: previous.cloned(),
            url: url.clone(),
            changed: false,
        };
    };

    // And don't bother if the new encoding is the same as the old one
    if !allow_nil_encoder {
        if let Some(previous_encoder) = previous {
            if working.encoding().id() == previous_encoder.encoding().id() {
                return EncodingUpdate {
                    encoder: previous.cloned(),
                    url: url.clone(),
                    changed: false,
                };
            }
        }
    }

    // Percent-encode with the new encoding, then check validity of the
    // result. The check only fails when converting to UTF-8 while the URL
    // holds bytes from another encoding, and the chain then retries with
    // the invalid encoding, which cannot fail for an absolute URL string.
    let pre_encoded = working.encode(url.as_str(), true);
    let (new_url, result_encoder) = encoded_url_with_fallback(&pre_encoded, &working);

    // The change is judged against the encoding that was asked for, not the
    // one the fallback may have landed on: switching an invalid-tagged URL to
    // UTF-8 is a change even when validation drops it back to invalid
    let changed = !allow_nil_encoder
        && previous.map(|p| p.encoding().id()) != Some(working.encoding().id());
    if changed {
        debug!(
            from = ?previous.map(|p| p.encoding().to_string()),
            to = %result_encoder.encoding(),
            "character encoding updated"
        );
    }

    EncodingUpdate {
        encoder: Some(result_encoder),
        url: new_url,
        changed,
    }
}
