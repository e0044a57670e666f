use crate::{CodecError, HEADER_WIDTH, Table, TableRegistry, decode, encode};

fn assert_round_trip(table: &str, text: &str) -> String {
    let encoded = encode(table, text).unwrap();
    let decoded = decode(table, &encoded).unwrap();
    assert_eq!(decoded, text);
    encoded
}

fn assert_within_table(encoded: &str, table: &str) {
    for c in encoded.chars() {
        assert!(table.contains(c), "symbol {c:?} is not in {table:?}");
    }
}

#[test]
fn test_round_trip_empty_binary_table() {
    let encoded = assert_round_trip("ab", "");
    assert_within_table(&encoded, "ab");
}

#[test]
fn test_round_trip_hex_table() {
    let encoded = assert_round_trip("0123456789ABCDEF", "Binary-ish payload");
    assert_within_table(&encoded, "0123456789ABCDEF");
}

#[test]
fn test_round_trip_hakimi_table() {
    let encoded = assert_round_trip("哈基米", "Hello, 世界");
    assert_within_table(&encoded, "哈基米");
}

#[test]
fn test_round_trip_sample_table() {
    let encoded = assert_round_trip("哈基米南北绿豆啊系噶", "Hello");
    println!("Encoded: {}", encoded);
    assert_within_table(&encoded, "哈基米南北绿豆啊系噶");
}

#[test]
fn test_duplicate_table_matches_deduped_output() {
    let message = "repeat chars should dedupe";
    let encoded = assert_round_trip("哈哈哈哈哈一二三四", message);
    assert_within_table(&encoded, "哈一二三四");
    assert_eq!(encoded, encode("哈一二三四", message).unwrap());

    assert_eq!(
        encode("aaabbc", message).unwrap(),
        encode("abc", message).unwrap()
    );
}

#[test]
fn test_decode_with_duplicated_table() {
    let encoded = encode("abc", "dedupe on decode too").unwrap();
    assert_eq!(
        decode("aaabbc", &encoded).unwrap(),
        "dedupe on decode too"
    );
}

#[test]
fn test_single_distinct_symbol_rejected() {
    assert!(matches!(
        encode("哈", "too short"),
        Err(CodecError::InvalidTable { .. })
    ));
    assert!(matches!(
        decode("哈", "哈"),
        Err(CodecError::InvalidTable { .. })
    ));
    assert!(matches!(
        encode("aaaa", "x"),
        Err(CodecError::InvalidTable {
            supplied: 4,
            distinct: 1
        })
    ));
    assert!(matches!(encode("", "x"), Err(CodecError::InvalidTable { .. })));
}

#[test]
fn test_truncated_decode() {
    for input in ["", "a", "ab", "aba"] {
        assert_eq!(
            decode("ab", input),
            Err(CodecError::TruncatedInput {
                actual: input.chars().count()
            })
        );
    }
}

#[test]
fn test_foreign_symbol_decode() {
    let mut encoded = encode("ab", "hello").unwrap();
    encoded.insert(6, 'z');
    assert_eq!(
        decode("ab", &encoded),
        Err(CodecError::InvalidSymbol {
            symbol: 'z',
            position: 6
        })
    );
}

#[test]
fn test_foreign_symbol_in_header() {
    assert!(matches!(
        decode("ab", "abzab"),
        Err(CodecError::InvalidSymbol { symbol: 'z', .. })
    ));
}

#[test]
fn test_header_overflow_zero_length() {
    assert!(matches!(
        decode("01", "0000101"),
        Err(CodecError::HeaderOverflow { length: 0, .. })
    ));
}

#[test]
fn test_misaligned_body() {
    // header "0011" declares three-symbol codewords
    assert_eq!(
        decode("01", "00111010"),
        Err(CodecError::MisalignedBody { body: 4, length: 3 })
    );
}

#[test]
fn test_corrupt_payload() {
    assert!(matches!(
        decode("0123456789ABCDEF", "0001FF"),
        Err(CodecError::CorruptPayload(_))
    ));
}

#[test]
fn test_deterministic() {
    let first = encode("哈基米南北绿豆啊系噶", "same input, same output").unwrap();
    let second = encode("哈基米南北绿豆啊系噶", "same input, same output").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_header_width_and_alignment() {
    let encoded = encode("哈基米", "header").unwrap();
    let symbols: Vec<char> = encoded.chars().collect();
    assert!(symbols.len() > HEADER_WIDTH);
    // the chosen codeword length is 1, so the header is the digit one
    assert_eq!(symbols[..HEADER_WIDTH], ['哈', '哈', '哈', '基']);
}

#[test]
fn test_round_trip_large_payload() {
    let text: String = "基米 mixed ASCII and 漢字 😀 ".repeat(200);
    let encoded = assert_round_trip("0123456789", &text);
    assert_within_table(&encoded, "0123456789");
}

#[test]
fn test_round_trip_leading_nul_text() {
    assert_round_trip("ab", "\0\0\0start with nul");
}

#[test]
fn test_large_table_round_trip() {
    let registry = TableRegistry::load_default().unwrap();
    let table = registry.table("cjk").unwrap();
    let encoded = crate::encode_with(&table, "a fairly ordinary sentence").unwrap();
    assert!(encoded.chars().all(|c| table.contains(c)));
    assert_eq!(
        crate::decode_with(&table, &encoded).unwrap(),
        "a fairly ordinary sentence"
    );
}

#[test]
fn test_table_is_shareable_across_threads() {
    let table: Table = "哈基米".parse().unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let table = &table;
                scope.spawn(move || {
                    let text = format!("thread {i}");
                    let encoded = crate::encode_with(table, &text).unwrap();
                    crate::decode_with(table, &encoded).unwrap() == text
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}
