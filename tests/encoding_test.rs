use encoding_rs::WINDOWS_1252;
use rs_readable::encoding::{decode, DecodeSource};
use rs_readable::{extract, Error};
use url::Url;

fn base() -> Url {
    Url::parse("https://example.com/").expect("valid url")
}

/// BOM beats a conflicting header and meta declaration
#[test]
fn utf8_bom_has_priority() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(
        "<html><head><meta charset=\"windows-1252\"></head><body><p>Ünïcödé text wins</p></body></html>"
            .as_bytes(),
    );

    let decoded = decode(&bytes, Some("text/html; charset=iso-8859-1")).expect("decode failed");

    assert_eq!(decoded.source, DecodeSource::ByteOrderMark);
    assert!(decoded.text.contains("Ünïcödé text wins"));
}

/// Header charset round trip for ISO-8859-1
#[test]
fn header_charset_round_trip() {
    let bytes = b"<html><body>Caf\xE9</body></html>";

    let decoded = decode(bytes, Some("Content-Type: text/html; charset=iso-8859-1"))
        .expect("decode failed");

    assert!(decoded.text.contains("Café"));
}

#[test]
fn header_charset_is_case_insensitive() {
    let bytes = b"<p>M\xFCnchen</p>";
    let decoded = decode(bytes, Some("text/html;  CHARSET = ISO-8859-1 ")).expect("decode failed");
    assert_eq!(decoded.source, DecodeSource::TransportHeader);
    assert!(decoded.text.contains("München"));
}

#[test]
fn meta_charset_used_without_header() {
    let html = b"<html>\
        <head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"></head>\
        <body><article>\
            <p>\x93Smart quotes\x94 and an en\x96dash in a sentence.</p>\
        </article></body></html>";

    let decoded = decode(html, None).expect("decode failed");

    assert_eq!(decoded.source, DecodeSource::MetaTag);
    assert!(decoded.text.contains("\u{201C}Smart quotes\u{201D}"));
    assert!(decoded.text.contains("en\u{2013}dash"));
}

#[test]
fn shift_jis_from_header() {
    // "日本" in Shift_JIS
    let bytes = b"<p>\x93\xfa\x96\x7b</p>";
    let decoded = decode(bytes, Some("text/html; charset=Shift_JIS")).expect("decode failed");
    assert!(decoded.text.contains("日本"));
}

#[test]
fn utf8_assumed_when_no_charset() {
    let html = "<html><body><p>Plain UTF-8: é, ñ, 中文</p></body></html>".as_bytes();
    let decoded = decode(html, None).expect("decode failed");
    assert_eq!(decoded.source, DecodeSource::Utf8Fallback);
    assert!(decoded.text.contains("中文"));
}

#[test]
fn undecodable_bytes_fail_extraction() {
    let html = b"<html><body><article><p>Broken \xFF\xFE\xFD bytes in an article body.</p></article></body></html>";
    assert_eq!(extract(html, None, &base()), Err(Error::CharsetDetectionFailed));
}

#[test]
fn latin1_article_extracts_end_to_end() {
    let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head>\
        <body><article><h1>Caf\xE9 espa\xF1ol</h1><p>M\xFCnchen ist sch\xF6n.</p></article></body></html>";

    let article = extract(html, None, &base()).expect("extraction failed");

    assert_eq!(article.title, "Café");
    assert!(article.content_markdown.contains("# Café español"));
    assert!(article.content_markdown.contains("München ist schön."));
}

/// A header charset whose decoder rejects the bytes hands over to the meta tag
#[test]
fn rejected_header_charset_falls_through_to_meta() {
    let html = b"<html><head><meta charset=windows-1252></head>\
        <body><p>\x93Quoted\x94 words</p></body></html>";

    let decoded = decode(html, Some("text/html; charset=utf-8")).expect("decode failed");

    assert_eq!(decoded.source, DecodeSource::MetaTag);
    assert_eq!(decoded.encoding, WINDOWS_1252);
    assert!(decoded.text.contains("\u{201C}Quoted\u{201D} words"));
}

/// Odd-length input cannot be UTF-16, so the UTF-8 fallback recovers it
#[test]
fn rejected_utf16_header_falls_back_to_utf8() {
    let html = "<p>café ok</p>".as_bytes();
    assert_eq!(html.len() % 2, 1);

    let decoded = decode(html, Some("text/html; charset=utf-16le")).expect("decode failed");

    assert_eq!(decoded.source, DecodeSource::Utf8Fallback);
    assert_eq!(decoded.text, "<p>café ok</p>");
}

#[test]
fn quoted_meta_charset_beats_utf8_fallback() {
    let html = b"<html><head><meta charset=\"windows-1252\"></head><body><p>plain ascii</p></body></html>";

    let decoded = decode(html, None).expect("decode failed");

    assert_eq!(decoded.source, DecodeSource::MetaTag);
    assert_eq!(decoded.encoding, WINDOWS_1252);
}
