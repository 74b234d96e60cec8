//! Encoding-aware query extraction from built URLs.
//!
//! Percent-encoding can only be removed safely when the query text is UTF-8;
//! stripping it from a query produced by a legacy encoder would corrupt the
//! multi-byte sequences. These accessors decide from the encoder value which
//! behavior applies, instead of asking the caller to branch.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::encoder::Encoder;
use crate::types::QueryItem;

/// The query of a URL as a string, regardless of character encoding.
///
/// With no encoder or a UTF-8 encoder the percent-encoding is removed; with
/// any other encoder the query comes back exactly as percent-encoded. An
/// absent query is an empty string.
pub fn query_string(url: &Url, encoder: Option<&Encoder>) -> String {
    let raw = url.query().unwrap_or("");
    if encoder.map_or(true, Encoder::is_utf8) {
        // Percent encoding can be safely removed when using UTF-8
        percent_decode_str(raw).decode_utf8_lossy().into_owned()
    } else {
        raw.to_string()
    }
}

/// The query of a URL as ordered name/value pairs.
///
/// For UTF-8 (or no) encoders the pairs are decoded through
/// [`Url::query_pairs`]. For any other encoder the percent escapes are
/// preserved, splitting the raw query on `&` and the first `=` of each
/// segment; a segment without `=` keeps a `None` value, and empty segments
/// survive as items with an empty name, so that rejoining the items with
/// `&` reproduces the raw query exactly. An absent query is an empty vector.
///
/// # Examples
///
/// ```
/// use encoded_url::{query_items, Encoder};
/// use url::Url;
///
/// let url = Url::parse("http://example.com/?q=%83e%83X%83g&page=1").unwrap();
/// let sjis = Encoder::from_name("shift_jis").expect("known alias");
///
/// let items = query_items(&url, Some(&sjis));
/// assert_eq!(items[0].name, "q");
/// assert_eq!(items[0].value.as_deref(), Some("%83e%83X%83g"));
/// ```
pub fn query_items(url: &Url, encoder: Option<&Encoder>) -> Vec<QueryItem> {
    if encoder.map_or(true, Encoder::is_utf8) {
        url.query_pairs()
            .map(|(name, value)| QueryItem {
                name: name.into_owned(),
                value: Some(value.into_owned()),
            })
            .collect()
    } else {
        let Some(raw) = url.query() else {
            return Vec::new();
        };
        raw.split('&')
            .map(|segment| match segment.split_once('=') {
                Some((name, value)) => QueryItem {
                    name: name.to_string(),
                    value: Some(value.to_string()),
                },
                None => QueryItem {
                    name: segment.to_string(),
                    value: None,
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_query_string_utf8_decodes() {
        let url = url("http://example.com/?q=test%20query");
        assert_eq!(query_string(&url, None), "q=test query");

        let utf8 = Encoder::utf8();
        assert_eq!(query_string(&url, Some(&utf8)), "q=test query");
    }

    #[test]
    fn test_query_string_non_utf8_preserves_escapes() {
        let url = url("http://example.com/?q=%83e%83X%83g");
        let sjis = Encoder::from_name("shift_jis").unwrap();
        assert_eq!(query_string(&url, Some(&sjis)), "q=%83e%83X%83g");
    }

    #[test]
    fn test_empty_query() {
        let url = url("http://example.com/");
        let sjis = Encoder::from_name("shift_jis").unwrap();
        assert_eq!(query_string(&url, None), "");
        assert_eq!(query_string(&url, Some(&sjis)), "");
        assert!(query_items(&url, None).is_empty());
        assert!(query_items(&url, Some(&sjis)).is_empty());
    }

    #[test]
    fn test_items_utf8_decoded() {
        let url = url("http://example.com/?q=test%20query&page=1");
        let items = query_items(&url, None);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "q");
        assert_eq!(items[0].value.as_deref(), Some("test query"));
        assert_eq!(items[1].name, "page");
        assert_eq!(items[1].value.as_deref(), Some("1"));
    }

    #[test]
    fn test_items_non_utf8_keep_escapes_in_order() {
        let url = url("http://example.com/?a=%8A%E6&b=2&c=%83e");
        let sjis = Encoder::from_name("shift_jis").unwrap();
        let items = query_items(&url, Some(&sjis));
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].value.as_deref(), Some("%8A%E6"));
        assert_eq!(items[1].value.as_deref(), Some("2"));
        assert_eq!(items[2].value.as_deref(), Some("%83e"));
    }

    #[test]
    fn test_item_without_equals() {
        let url = url("http://example.com/?flag&a=1&empty=");
        let sjis = Encoder::from_name("shift_jis").unwrap();
        let items = query_items(&url, Some(&sjis));
        assert_eq!(items[0].name, "flag");
        assert_eq!(items[0].value, None);
        // An explicit '=' with nothing after it is an empty value, not absent
        assert_eq!(items[2].name, "empty");
        assert_eq!(items[2].value.as_deref(), Some(""));
    }

    #[test]
    fn test_round_trip_non_utf8_query() {
        let raws = vec![
            "q=%8A%E6%8AG&page=1&x=%83e%83X%83g",
            "flag&q=%8A%E6",
            "a=%83e&&b=2",
            "flag",
        ];
        let sjis = Encoder::from_name("shift_jis").unwrap();

        for raw in raws {
            let url = url(&format!("http://example.com/?{}", raw));
            let rejoined = query_items(&url, Some(&sjis))
                .iter()
                .map(QueryItem::to_string)
                .collect::<Vec<_>>()
                .join("&");
            assert_eq!(rejoined, raw, "round trip of {:?}", raw);
        }
    }
}
