//! Error types for URL encoding operations.

use thiserror::Error;

/// Errors that can occur while building a percent-encoded URL.
///
/// These cover the recoverable failures of the pipeline. Name resolution
/// failures are expressed as `Option` at the registry boundary, transcoding
/// failures are recovered internally by the UTF-8 fallback, and the
/// double-fallback failure in
/// [`encoded_url_with_fallback`](crate::builder::encoded_url_with_fallback)
/// is a panic because it indicates a broken contract, not bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeUrlError {
    /// Pre-existing percent escapes could not be removed because the decoded
    /// bytes are not valid UTF-8.
    #[error("failed to remove preexisting percent encoding")]
    RemovePercentEncoding,

    /// The partially encoded string could not be split into URL components.
    #[error("URL could not be broken into components: {0}")]
    Components(#[from] url::ParseError),
}
