#![allow(missing_docs)]

use ctc_alphabet::{
    Alphabet,
    AlphabetError,
    ByteAlphabet,
    LabelCodec,
    LabelVocab,
    io::{read_alphabet_binary, write_alphabet_config},
};

type L = u32;

/// Build config text from token lines, joined with `newline`.
fn config_text(
    lines: &[String],
    newline: &str,
) -> String {
    lines
        .iter()
        .map(|line| format!("{line}{newline}"))
        .collect()
}

fn line_strategy() -> impl proptest::strategy::Strategy<Value = String> {
    use proptest::prelude::*;
    prop_oneof![
        "[a-z0-9]{1,3}",
        "#[a-z]{0,4}",
        Just("\\#".to_string()),
        Just(String::new()),
        Just(" ".to_string()),
        Just("\u{3000}".to_string()),
        "\\PC",
    ]
}

proptest::proptest! {
    #![proptest_config(proptest::prelude::ProptestConfig::with_cases(256))]

    #[test]
    fn newline_conventions_are_equivalent(lines in proptest::collection::vec(line_strategy(), 0..32)) {
        let lf: Alphabet<L> = Alphabet::from_config_reader(config_text(&lines, "\n").as_bytes()).unwrap();
        let cr: Alphabet<L> = Alphabet::from_config_reader(config_text(&lines, "\r").as_bytes()).unwrap();
        let crlf: Alphabet<L> = Alphabet::from_config_reader(config_text(&lines, "\r\n").as_bytes()).unwrap();

        proptest::prop_assert_eq!(&lf, &cr);
        proptest::prop_assert_eq!(&lf, &crlf);
    }

    #[test]
    fn serialization_round_trips(lines in proptest::collection::vec(line_strategy(), 0..32)) {
        let alphabet: Alphabet<L> = Alphabet::from_config_reader(config_text(&lines, "\n").as_bytes()).unwrap();
        let buf = alphabet.serialize().unwrap();
        let restored: Alphabet<L> = Alphabet::from_buffer(&buf).unwrap();

        proptest::prop_assert_eq!(restored.size(), alphabet.size());
        proptest::prop_assert_eq!(restored.space_label(), alphabet.space_label());
        for (label, token) in alphabet.vocab().sorted_entries() {
            proptest::prop_assert_eq!(restored.decode_label(label).unwrap(), token);
            proptest::prop_assert_eq!(
                restored.encode_token(token).unwrap(),
                alphabet.encode_token(token).unwrap()
            );
        }
        proptest::prop_assert_eq!(&restored, &alphabet);
    }

    #[test]
    fn every_label_decodes(lines in proptest::collection::vec("[a-c]", 0..16)) {
        // Few distinct tokens, so lines repeat.
        let alphabet: Alphabet<L> = Alphabet::from_config_reader(config_text(&lines, "\n").as_bytes()).unwrap();

        proptest::prop_assert_eq!(alphabet.size(), lines.len());
        for (idx, line) in lines.iter().enumerate() {
            let label = idx as L;
            proptest::prop_assert_eq!(alphabet.decode_label(label).unwrap(), line.as_bytes());
            let encoded = alphabet.encode_token(line.as_bytes()).unwrap();
            proptest::prop_assert_eq!(alphabet.decode_label(encoded).unwrap(), line.as_bytes());
        }
    }

    #[test]
    fn truncated_buffers_fail(
        lines in proptest::collection::vec("[a-z\u{e9}\u{4f60}]{1,3}", 1..16),
        cut in proptest::prelude::any::<proptest::sample::Index>(),
    ) {
        let alphabet: Alphabet<L> = Alphabet::from_config_reader(config_text(&lines, "\n").as_bytes()).unwrap();
        let buf = alphabet.serialize().unwrap();
        let end = cut.index(buf.len());

        let err = read_alphabet_binary::<L>(&buf[..end]).unwrap_err();
        let is_truncated = matches!(err, AlphabetError::Truncated { .. });
        proptest::prop_assert!(is_truncated, "prefix {} of {}: {:?}", end, buf.len(), err);
    }

    #[test]
    fn byte_alphabet_is_universal(text in "\\PC{0,64}") {
        let alphabet: ByteAlphabet<L> = ByteAlphabet::new(LabelVocab::byte_identity().unwrap());

        proptest::prop_assert!(alphabet.can_encode(&text));
        let labels = alphabet.encode(&text).unwrap();
        proptest::prop_assert_eq!(labels.len(), text.len());
        proptest::prop_assert_eq!(alphabet.decode(&labels).unwrap(), text);
    }

    #[test]
    fn encode_decode_inverse(text in "[abc \u{e9}#]{0,40}") {
        let alphabet: Alphabet<L> =
            Alphabet::from_config_reader("a\nb\nc\n \n\u{e9}\n\\#\n".as_bytes()).unwrap();

        proptest::prop_assert!(alphabet.can_encode(&text));
        let labels = alphabet.encode(&text).unwrap();
        proptest::prop_assert_eq!(labels.len(), text.chars().count());
        proptest::prop_assert_eq!(alphabet.decode(&labels).unwrap(), text);
    }
}

#[test]
fn test_config_example() {
    let alphabet: Alphabet<L> =
        Alphabet::from_config_reader("a\nb\n \n#comment\n\\#\n".as_bytes()).unwrap();

    assert_eq!(alphabet.size(), 4);
    assert_eq!(alphabet.space_label(), Some(2));
    for (token, label) in [("a", 0), ("b", 1), (" ", 2), ("#", 3)] {
        assert_eq!(alphabet.encode_token(token.as_bytes()).unwrap(), label);
    }
    assert_eq!(alphabet.encode("ab").unwrap(), vec![0, 1]);
    assert_eq!(alphabet.decode(&[1, 0, 2]).unwrap(), "ba ");
}

#[test]
fn test_byte_alphabet_counts_bytes() {
    let alphabet: ByteAlphabet<L> = ByteAlphabet::new(LabelVocab::byte_identity().unwrap());

    // Two codepoints, five bytes.
    let text = "\u{e9}\u{4f60}";
    assert_eq!(text.len(), 5);
    assert_eq!(alphabet.encode(text).unwrap().len(), 5);

    let codepoints: Alphabet<L> = alphabet.clone().into_splitter();
    assert!(!codepoints.can_encode(text));
    assert!(codepoints.encode(text).is_err());
}

#[test]
fn test_unknown_symbols_are_recoverable() {
    let alphabet: Alphabet<L> = Alphabet::from_config_reader("x\ny\n".as_bytes()).unwrap();

    let texts = ["xy", "xz", "yx"];
    let results: Vec<_> = texts.iter().map(|t| alphabet.try_encode(t)).collect();
    assert!(results[0].is_ok());
    assert!(results[1].as_ref().is_err_and(AlphabetError::is_unknown_symbol));
    assert!(results[2].is_ok());

    let err = alphabet.decode(&[0, 1, 2]).unwrap_err();
    assert!(err.is_unknown_symbol());
}

#[test]
fn test_config_written_from_buffer() {
    let buf = [
        3, 0, // count
        2, 0, 1, 0, b'#', // 2 => "#"
        0, 0, 1, 0, b'q', // 0 => "q"
        1, 0, 1, 0, b'\t', // 1 => "\t"
    ];
    let alphabet: Alphabet<L> = Alphabet::from_buffer(&buf).unwrap();
    assert_eq!(alphabet.space_label(), Some(1));

    let mut config = Vec::new();
    write_alphabet_config(alphabet.vocab(), &mut config).unwrap();
    assert_eq!(config, b"q\n\t\n\\#\n");

    let reread: Alphabet<L> = Alphabet::from_config_reader(config.as_slice()).unwrap();
    assert_eq!(reread, alphabet);
}

#[test]
fn test_shared_across_threads() {
    let alphabet: Alphabet<L> =
        Alphabet::from_config_reader("a\nb\nc\n \n".as_bytes()).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let labels = alphabet.encode("abc cab").unwrap();
                    assert_eq!(alphabet.decode(&labels).unwrap(), "abc cab");
                }
            });
        }
    });
}
