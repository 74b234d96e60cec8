//! Encoding name resolution.
//!
//! Maps human-typed encoding names ("shift_jis", "cp1251", "Big5") to stable
//! numeric identifiers and back to transcoding machinery. Resolution tries
//! the WHATWG label registry built into `encoding_rs` first as a fast path,
//! then falls back to the static alias table below, which also carries names
//! the registry does not know (UTF-16/32 variants, the ISO-2022 family, and
//! the literal "invalid" name). The two sources agree on every label both
//! recognize; the static table is authoritative for the rest.

use encoding_rs::Encoding;
use tracing::trace;

use crate::types::EncodingId;

/// Resolve a human-readable encoding name to its identifier.
///
/// The name is matched case-insensitively, ignoring punctuation: `"UTF-8"`,
/// `"utf8"`, and `"Unicode-1-1-UTF-8"` all resolve to the UTF-8 identifier.
/// Unknown names resolve to `None`; this is an expected outcome, not an
/// error.
///
/// # Examples
///
/// ```
/// use encoded_url::{resolve, EncodingId};
///
/// assert_eq!(resolve("Shift_JIS"), Some(EncodingId::new(932)));
/// assert_eq!(resolve("utf8"), Some(EncodingId::UTF_8));
/// assert_eq!(resolve("klingon"), None);
/// ```
pub fn resolve(label: &str) -> Option<EncodingId> {
    // Fast path: the WHATWG registry recognizes most labels directly.
    if let Some(encoding) = Encoding::for_label(label.trim().as_bytes()) {
        if let Some(id) = id_for_encoding(encoding) {
            trace!(label, id = id.raw(), "resolved via WHATWG registry");
            return Some(id);
        }
    }

    let normalized = normalize_label(label);
    if normalized.is_empty() {
        // Nothing but removable characters in the name
        return None;
    }

    alias_id(&normalized)
}

/// Lowercase a label and strip every character that is not an ASCII
/// lowercase letter or digit.
pub(crate) fn normalize_label(label: &str) -> String {
    label
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// The static alias table, adapted from the WHATWG names-and-labels list:
/// <https://encoding.spec.whatwg.org/#names-and-labels>
fn alias_id(normalized: &str) -> Option<EncodingId> {
    let raw: u32 = match normalized {
        // UTF-8
        "unicode11utf8" | "unicode20utf8" | "utf8" | "xunicode20utf8" => 65001,
        // Legacy single-byte encodings
        "866" | "cp866" | "csibm866" | "ibm866" => 866,
        "csisolatin2" | "iso88592" | "isoir101" | "iso885921987" | "l2" | "latin2" => 28592,
        "csisolatin3" | "iso88593" | "isoir109" | "iso885931988" | "l3" | "latin3" => 28593,
        "csisolatin4" | "iso88594" | "isoir110" | "iso885941988" | "l4" | "latin4" => 28594,
        "csisolatincyrillic" | "cyrillic" | "iso88595" | "isoir144" | "iso885951988" => 28595,
        "arabic" | "asmo708" | "csiso88596e" | "csiso88596i" | "csisolatinarabic" | "ecma114"
        | "iso88596" | "iso88596e" | "iso88596i" | "isoir127" | "iso885961987" => 28596,
        "csisolatingreek" | "ecma118" | "elot928" | "greek" | "greek8" | "iso88597"
        | "isoir126" | "iso885971987" | "suneugreek" => 28597,
        "csiso88598e" | "csisolatinhebrew" | "hebrew" | "iso88598" | "iso88598e" | "isoir138"
        | "iso885981988" | "visual" => 28598,
        // Logical-order Hebrew is its own encoding, unlike visual iso-8859-8
        "csiso88598i" | "iso88598i" | "logical" => 38598,
        "csisolatin6" | "iso885910" | "isoir157" | "l6" | "latin6" => 28600,
        "iso885913" => 28603,
        "iso885914" => 28604,
        "csisolatin9" | "iso885915" | "l9" => 28605,
        "iso885916" => 28606,
        "cskoi8r" | "koi" | "koi8" | "koi8r" => 20866,
        "koi8ru" | "koi8u" => 21866,
        "csmacintosh" | "mac" | "macintosh" | "xmacroman" => 10000,
        "dos874" | "iso885911" | "tis620" | "windows874" => 874,
        "cp1250" | "windows1250" | "xcp1250" => 1250,
        "cp1251" | "windows1251" | "xcp1251" => 1251,
        // ASCII/Latin-1 and variants fold into windows-1252, following WHATWG
        "ansix341968" | "ascii" | "cp1252" | "cp819" | "csisolatin1" | "ibm819" | "iso88591"
        | "iso885911987" | "isoir100" | "isolatin1" | "l1" | "latin1" | "usascii"
        | "windows1252" | "xcp1252" => 1252,
        "cp1253" | "windows1253" | "xcp1253" => 1253,
        "cp1254" | "csisolatin5" | "iso88599" | "isoir148" | "iso885991989" | "l5" | "latin5"
        | "windows1254" | "xcp1254" => 1254,
        "cp1255" | "windows1255" | "xcp1255" => 1255,
        "cp1256" | "windows1256" | "xcp1256" => 1256,
        "cp1257" | "windows1257" | "xcp1257" => 1257,
        "cp1258" | "windows1258" | "xcp1258" => 1258,
        "xmaccyrillic" | "xmacukrainian" => 10007,
        // Legacy multi-byte Chinese (simplified) encodings
        "chinese" | "csgb2312" | "csiso58gb231280" | "gb2312" | "gb231280" | "gbk" | "isoir58"
        | "xgbk" => 936,
        "gb18030" => 54936,
        // Legacy multi-byte Chinese (traditional) encodings; the Hong Kong
        // and Taiwan variants fold into Big5
        "big5" | "big5e" | "big5hkscs" | "big5hkscs1999" | "cnbig5" | "csbig5" | "xxbig5" => 950,
        // Legacy multi-byte Japanese encodings
        "cseucpkdfmtjapanese" | "eucjp" | "xeucjp" => 51932,
        "csiso2022jp" | "iso2022jp" => 50220,
        "csshiftjis" | "ms932" | "mskanji" | "shiftjis" | "sjis" | "windows31j" | "xsjis" => 932,
        // Legacy multi-byte Korean encodings
        "cseuckr" | "csksc56011987" | "euckr" | "isoir149" | "korean" | "ksc5601"
        | "ksc56011987" | "ksc56011989" | "windows949" => 949,
        // UTF-16/32 with explicit endianness; "bare" Unicode means UTF-16
        "iec10646" | "iso10646" | "ucs" | "unicode" | "utf16" | "utf16le" => 1200,
        "utf16be" => 1201,
        "utf32" | "utf32le" => 12000,
        "utf32be" => 12001,
        // ISO-2022/HZ families: resolvable by name, no transcoder available
        "csiso2022kr" | "iso2022kr" => 50225,
        "iso2022cn" => 50227,
        "iso2022cnext" => 50229,
        "hzgb2312" => 52936,
        // Invalid case
        "invalid" | "invalidutf8" => return Some(EncodingId::INVALID),
        _ => return None,
    };

    Some(EncodingId::new(raw))
}

/// Look up the transcoder for an identifier.
///
/// Identifiers without an encode-capable `encoding_rs` representation
/// (UTF-16 and UTF-32, the ISO-2022-KR family, the invalid sentinel,
/// unrecognized code pages) return `None`; the encoder then falls back to
/// UTF-8 bytes. `encoding_rs` has UTF-16 decoders but encodes their output
/// as UTF-8, so mapping 1200/1201 here would take the same byte path while
/// pretending otherwise.
pub fn encoding_for_id(id: EncodingId) -> Option<&'static Encoding> {
    let encoding = match id.raw() {
        866 => encoding_rs::IBM866,
        874 => encoding_rs::WINDOWS_874,
        932 => encoding_rs::SHIFT_JIS,
        936 => encoding_rs::GBK,
        949 => encoding_rs::EUC_KR,
        950 => encoding_rs::BIG5,
        1250 => encoding_rs::WINDOWS_1250,
        1251 => encoding_rs::WINDOWS_1251,
        1252 => encoding_rs::WINDOWS_1252,
        1253 => encoding_rs::WINDOWS_1253,
        1254 => encoding_rs::WINDOWS_1254,
        1255 => encoding_rs::WINDOWS_1255,
        1256 => encoding_rs::WINDOWS_1256,
        1257 => encoding_rs::WINDOWS_1257,
        1258 => encoding_rs::WINDOWS_1258,
        10000 => encoding_rs::MACINTOSH,
        10007 => encoding_rs::X_MAC_CYRILLIC,
        20866 => encoding_rs::KOI8_R,
        21866 => encoding_rs::KOI8_U,
        // Code page 28591 is ISO-8859-1, which the WHATWG standard folds
        // into windows-1252
        28591 => encoding_rs::WINDOWS_1252,
        28592 => encoding_rs::ISO_8859_2,
        28593 => encoding_rs::ISO_8859_3,
        28594 => encoding_rs::ISO_8859_4,
        28595 => encoding_rs::ISO_8859_5,
        28596 => encoding_rs::ISO_8859_6,
        28597 => encoding_rs::ISO_8859_7,
        28598 => encoding_rs::ISO_8859_8,
        28600 => encoding_rs::ISO_8859_10,
        28603 => encoding_rs::ISO_8859_13,
        28604 => encoding_rs::ISO_8859_14,
        28605 => encoding_rs::ISO_8859_15,
        28606 => encoding_rs::ISO_8859_16,
        38598 => encoding_rs::ISO_8859_8_I,
        50220 => encoding_rs::ISO_2022_JP,
        51932 => encoding_rs::EUC_JP,
        54936 => encoding_rs::GB18030,
        65001 => encoding_rs::UTF_8,
        _ => return None,
    };
    Some(encoding)
}

/// The identifier for an `encoding_rs` encoding, if one exists.
fn id_for_encoding(encoding: &'static Encoding) -> Option<EncodingId> {
    let raw: u32 = match encoding.name() {
        "UTF-8" => 65001,
        "IBM866" => 866,
        "ISO-8859-2" => 28592,
        "ISO-8859-3" => 28593,
        "ISO-8859-4" => 28594,
        "ISO-8859-5" => 28595,
        "ISO-8859-6" => 28596,
        "ISO-8859-7" => 28597,
        "ISO-8859-8" => 28598,
        "ISO-8859-8-I" => 38598,
        "ISO-8859-10" => 28600,
        "ISO-8859-13" => 28603,
        "ISO-8859-14" => 28604,
        "ISO-8859-15" => 28605,
        "ISO-8859-16" => 28606,
        "KOI8-R" => 20866,
        "KOI8-U" => 21866,
        "macintosh" => 10000,
        "windows-874" => 874,
        "windows-1250" => 1250,
        "windows-1251" => 1251,
        "windows-1252" => 1252,
        "windows-1253" => 1253,
        "windows-1254" => 1254,
        "windows-1255" => 1255,
        "windows-1256" => 1256,
        "windows-1257" => 1257,
        "windows-1258" => 1258,
        "x-mac-cyrillic" => 10007,
        "GBK" => 936,
        "gb18030" => 54936,
        "Big5" => 950,
        "EUC-JP" => 51932,
        "ISO-2022-JP" => 50220,
        "Shift_JIS" => 932,
        "EUC-KR" => 949,
        "UTF-16BE" => 1201,
        "UTF-16LE" => 1200,
        // "replacement" and "x-user-defined" have no identifier here
        _ => return None,
    };
    Some(EncodingId::new(raw))
}

/// The standard charset name for an identifier, for display purposes.
///
/// Returns `None` for the invalid sentinel and unrecognized code pages; the
/// caller decides on a placeholder (typically `"unknown"`).
pub fn charset_name(id: EncodingId) -> Option<&'static str> {
    match id.raw() {
        // Identifiers without a transcoder, or whose encoding_rs
        // representation carries a misleading name
        1200 => Some("UTF-16LE"),
        1201 => Some("UTF-16BE"),
        12000 => Some("UTF-32LE"),
        12001 => Some("UTF-32BE"),
        28591 => Some("ISO-8859-1"),
        50225 => Some("ISO-2022-KR"),
        50227 => Some("ISO-2022-CN"),
        50229 => Some("ISO-2022-CN-EXT"),
        52936 => Some("HZ-GB-2312"),
        _ => encoding_for_id(id).map(|encoding| encoding.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("UTF-8"), "utf8");
        assert_eq!(normalize_label("Shift_JIS"), "shiftjis");
        assert_eq!(normalize_label("ISO-8859-9:1989"), "iso885991989");
        assert_eq!(normalize_label("  x-cp1251  "), "xcp1251");
        assert_eq!(normalize_label("---"), "");
        assert_eq!(normalize_label("café"), "caf");
    }

    #[test]
    fn test_aliases_resolve_to_same_identifier() {
        let groups = vec![
            (vec!["UTF-8", "utf8", "Unicode-1-1-UTF-8"], 65001),
            (vec!["shift_jis", "Shift-JIS", "sjis", "MS_Kanji", "windows-31j"], 932),
            (vec!["cp1251", "windows-1251", "x-cp1251"], 1251),
            (vec!["big5", "Big5-HKSCS", "cn-big5", "x-x-big5"], 950),
            (vec!["gb2312", "GBK", "chinese", "csGB2312"], 936),
            (vec!["euc-kr", "korean", "windows-949", "ksc_5601"], 949),
            (vec!["euc-jp", "x-euc-jp", "csEUCPkdFmtJapanese"], 51932),
            (vec!["latin1", "ISO-8859-1", "us-ascii", "windows-1252"], 1252),
            (vec!["koi8-r", "koi", "cskoi8r"], 20866),
            (vec!["tis-620", "windows-874", "dos-874", "ISO-8859-11"], 874),
            (vec!["macintosh", "mac", "x-mac-roman"], 10000),
            (vec!["utf-16", "utf-16le", "unicode", "ucs"], 1200),
        ];

        for (labels, raw) in groups {
            for label in labels {
                assert_eq!(
                    resolve(label),
                    Some(EncodingId::new(raw)),
                    "label {:?} should resolve to {}",
                    label,
                    raw
                );
            }
        }
    }

    #[test]
    fn test_fast_path_agrees_with_static_table() {
        // Labels the WHATWG registry recognizes verbatim; stripping the
        // punctuation forces the static table path. Both must agree.
        let labels = vec![
            "iso-8859-2",
            "iso-8859-8-i",
            "koi8-u",
            "x-mac-cyrillic",
            "windows-874",
            "gb18030",
            "iso-2022-jp",
            "euc-kr",
            "utf-16be",
        ];

        for label in labels {
            let via_registry = resolve(label);
            let via_table = alias_id(&normalize_label(label));
            assert!(via_registry.is_some(), "registry should know {:?}", label);
            assert_eq!(via_registry, via_table, "paths disagree for {:?}", label);
        }
    }

    #[test]
    fn test_invalid_literal_resolves_to_sentinel() {
        assert_eq!(resolve("invalid"), Some(EncodingId::INVALID));
        assert_eq!(resolve("invalid utf-8"), Some(EncodingId::INVALID));
    }

    #[test]
    fn test_unknown_names_resolve_to_none() {
        assert_eq!(resolve("klingon"), None);
        assert_eq!(resolve("utf9"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("---"), None);
        assert_eq!(resolve("éé"), None);
        // Removed from the table upstream on purpose
        assert_eq!(resolve("x-user-defined"), None);
    }

    #[test]
    fn test_encoding_for_id() {
        assert_eq!(
            encoding_for_id(EncodingId::new(932)),
            Some(encoding_rs::SHIFT_JIS)
        );
        assert_eq!(
            encoding_for_id(EncodingId::UTF_8),
            Some(encoding_rs::UTF_8)
        );
        // ISO-8859-1 folds into windows-1252
        assert_eq!(
            encoding_for_id(EncodingId::new(28591)),
            Some(encoding_rs::WINDOWS_1252)
        );
        assert_eq!(encoding_for_id(EncodingId::INVALID), None);
        assert_eq!(encoding_for_id(EncodingId::new(50225)), None);
        // UTF-16/32 resolve by name but never transcode
        assert_eq!(encoding_for_id(EncodingId::new(1200)), None);
        assert_eq!(encoding_for_id(EncodingId::new(1201)), None);
        assert_eq!(encoding_for_id(EncodingId::new(12000)), None);
    }

    #[test]
    fn test_charset_names() {
        assert_eq!(charset_name(EncodingId::new(932)), Some("Shift_JIS"));
        assert_eq!(charset_name(EncodingId::new(950)), Some("Big5"));
        assert_eq!(charset_name(EncodingId::new(28591)), Some("ISO-8859-1"));
        assert_eq!(charset_name(EncodingId::new(50225)), Some("ISO-2022-KR"));
        assert_eq!(charset_name(EncodingId::new(1200)), Some("UTF-16LE"));
        assert_eq!(charset_name(EncodingId::new(12000)), Some("UTF-32LE"));
        assert_eq!(charset_name(EncodingId::INVALID), None);
        assert_eq!(charset_name(EncodingId::new(4242)), None);
    }

    #[test]
    fn test_round_trip_id_encoding_id() {
        // Every identifier in the alias table that has a transcoder maps back
        // to itself through the encoding
        for raw in [
            866u32, 874, 932, 936, 949, 950, 1250, 1251, 1252, 1253, 1254, 1255,
            1256, 1257, 1258, 10000, 10007, 20866, 21866, 28592, 28593, 28594, 28595, 28596,
            28597, 28598, 28600, 28603, 28604, 28605, 28606, 38598, 50220, 51932, 54936, 65001,
        ] {
            let id = EncodingId::new(raw);
            let encoding = encoding_for_id(id).expect("transcoder should exist");
            assert_eq!(id_for_encoding(encoding), Some(id), "round trip failed for {}", raw);
        }
    }
}
