use anvilnbt::{Compound, Document, Entry, Tag};

#[test]
fn minimal_compound_round_trips() {
    // S1: tag kind Compound, empty name, immediately terminated.
    let bytes = vec![0x0A, 0x00, 0x00, 0x00];

    let doc = Document::decode(&bytes).unwrap();
    assert_eq!(doc.roots().len(), 1);
    assert_eq!(doc.roots()[0].name, "");
    assert_eq!(doc.roots()[0].value, Tag::Compound(Compound::new()));

    assert_eq!(doc.encode().unwrap(), bytes);
}

#[test]
fn named_int_round_trips() {
    // S2: kind Int, name "foo", payload 42.
    let mut bytes = vec![0x03, 0x00, 0x03];
    bytes.extend_from_slice(b"foo");
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x2A]);

    let doc = Document::decode(&bytes).unwrap();
    assert_eq!(doc.roots()[0].name, "foo");
    assert_eq!(doc.roots()[0].value, Tag::Int(42));

    assert_eq!(doc.encode().unwrap(), bytes);
}

#[test]
fn gzip_envelope_is_transparently_unwrapped() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let plain = vec![0x0A, 0x00, 0x00, 0x00];
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&plain).unwrap();
    let gzipped = encoder.finish().unwrap();

    assert_eq!(gzipped[0], 0x1F);
    assert_eq!(gzipped[1], 0x8B);

    let doc = Document::decode_file(&gzipped).unwrap();
    assert_eq!(doc, Document::decode(&plain).unwrap());
}

#[test]
fn uncompressed_buffer_is_decoded_directly() {
    let bytes = vec![0x0A, 0x00, 0x00, 0x00];
    assert_eq!(bytes[0], 0x0A);
    let doc = Document::decode_file(&bytes).unwrap();
    assert_eq!(doc.roots()[0].value, Tag::Compound(Compound::new()));
}

#[test]
fn multi_root_document_reads_every_tag_until_exhausted() {
    let mut bytes = vec![0x0A, 0x00, 0x00, 0x00]; // Compound "" {}
    bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x07]); // Byte "" = 7

    let doc = Document::decode(&bytes).unwrap();
    assert_eq!(doc.roots().len(), 2);
    assert_eq!(doc.roots()[1].value, Tag::Byte(7));
}

#[test]
fn truncated_input_is_rejected() {
    let bytes = vec![0x03, 0x00, 0x03, b'f', b'o']; // name length says 3, only 2 bytes follow
    assert!(Document::decode(&bytes).is_err());
}

#[test]
fn multi_byte_utf8_name_and_string_payload_round_trip() {
    // A tag name and a TAG_String payload both containing multi-byte
    // codepoints, including one outside the BMP's single-byte-surrogate
    // range, must survive as plain UTF-8, not Java Modified UTF-8/CESU-8.
    let name = "™";
    let payload = "単体テストを書く";

    let mut doc = Document::new();
    doc.push(Entry::new(name, Tag::String(payload.to_string())));

    let encoded = doc.encode().unwrap();
    assert_eq!(encoded[1..3], [0x00, name.len() as u8]);

    let decoded = Document::decode(&encoded).unwrap();
    assert_eq!(decoded.roots()[0].name, name);
    assert_eq!(decoded.roots()[0].value, Tag::String(payload.to_string()));
    assert_eq!(decoded.encode().unwrap(), encoded);
}

#[test]
fn empty_string_name_and_payload_round_trip() {
    let mut doc = Document::new();
    doc.push(Entry::new("", Tag::String(String::new())));

    let encoded = doc.encode().unwrap();
    let decoded = Document::decode(&encoded).unwrap();
    assert_eq!(decoded.roots()[0].name, "");
    assert_eq!(decoded.roots()[0].value, Tag::String(String::new()));
}

#[test]
fn scalar_tags_round_trip_at_their_signed_extremes() {
    let mut doc = Document::new();
    doc.push(Entry::new("byte_min", Tag::Byte(i8::MIN)));
    doc.push(Entry::new("byte_max", Tag::Byte(i8::MAX)));
    doc.push(Entry::new("short_min", Tag::Short(i16::MIN)));
    doc.push(Entry::new("short_max", Tag::Short(i16::MAX)));
    doc.push(Entry::new("int_min", Tag::Int(i32::MIN)));
    doc.push(Entry::new("int_max", Tag::Int(i32::MAX)));
    doc.push(Entry::new("long_min", Tag::Long(i64::MIN)));
    doc.push(Entry::new("long_max", Tag::Long(i64::MAX)));

    let encoded = doc.encode().unwrap();
    let decoded = Document::decode(&encoded).unwrap();
    assert_eq!(decoded, doc);
}

#[test]
fn stray_end_tag_at_top_level_terminates_the_document() {
    // A kind-0 byte at the top level is the End sentinel, not a valid root
    // tag; per spec.md §4.3 step 1 it ends the decode rather than being
    // misread as the start of a new root (which would wrongly consume the
    // following bytes as a name).
    let mut bytes = vec![0x01, 0x00, 0x00, 0x07]; // Byte "" = 7
    bytes.push(0x00); // End
    bytes.extend_from_slice(b"trailing garbage that must not be parsed");

    let doc = Document::decode(&bytes).unwrap();
    assert_eq!(doc.roots().len(), 1);
    assert_eq!(doc.roots()[0].value, Tag::Byte(7));
}

#[test]
fn nested_compound_preserves_child_order() {
    let mut inner = Compound::new();
    inner.insert("b", Tag::Byte(2));
    inner.insert("a", Tag::Byte(1));

    let mut doc = Document::new();
    doc.push(Entry::new("root", Tag::Compound(inner.clone())));

    let encoded = doc.encode().unwrap();
    let decoded = Document::decode(&encoded).unwrap();
    match &decoded.roots()[0].value {
        Tag::Compound(c) => assert_eq!(c, &inner),
        _ => panic!("expected compound"),
    }
}
