// Syllable-level tests for the codec and its tone tables

use hanmap::codec::{parse_accented, parse_numbered, render_accented, render_numbered};
use hanmap::{HanMapper, Notation, Syllable, Tone, TranscriptionError};

#[test]
fn test_convert_syllable_examples() {
    let mapper = HanMapper::new().unwrap();

    let cases = [
        ("ma1", Notation::NumberedPinyin, Notation::AccentedPinyin, "mā"),
        ("ma1", Notation::NumberedPinyin, Notation::Zhuyin, "ㄇㄚ"),
        ("ma1", Notation::NumberedPinyin, Notation::Ipa, "ma˥"),
        ("nǚ", Notation::AccentedPinyin, Notation::NumberedPinyin, "nü3"),
        ("lv4", Notation::NumberedPinyin, Notation::AccentedPinyin, "lǜ"),
        ("ㄒㄧㄣ", Notation::Zhuyin, Notation::AccentedPinyin, "xīn"),
        ("ㄦ˙", Notation::Zhuyin, Notation::NumberedPinyin, "er5"),
        ("ɕi˧˩˧", Notation::Ipa, Notation::Zhuyin, "ㄒㄧˇ"),
        ("r5", Notation::NumberedPinyin, Notation::AccentedPinyin, "r"),
        ("r5", Notation::NumberedPinyin, Notation::Zhuyin, "ㄦ˙"),
    ];

    for (input, from, to, expected) in cases {
        assert_eq!(
            mapper.convert_syllable(input, from, to).unwrap(),
            expected,
            "{} {} -> {}",
            input,
            from,
            to
        );
    }
}

#[test]
fn test_convert_syllable_errors() {
    let mapper = HanMapper::new().unwrap();

    assert_eq!(
        mapper.convert_syllable("ma6", Notation::NumberedPinyin, Notation::AccentedPinyin),
        Err(TranscriptionError::InvalidSyllable("ma6".to_string()))
    );
    assert!(matches!(
        mapper.convert_syllable("bia1", Notation::NumberedPinyin, Notation::Ipa),
        Err(TranscriptionError::UnknownSyllable(_))
    ));
    assert!(matches!(
        mapper.convert_syllable("ㄇㄚx", Notation::Zhuyin, Notation::Ipa),
        Err(TranscriptionError::InvalidSyllable(_))
    ));
}

#[test]
fn test_empty_syllable_converts_to_empty() {
    let mapper = HanMapper::new().unwrap();

    for (from, to) in [
        (Notation::NumberedPinyin, Notation::AccentedPinyin),
        (Notation::AccentedPinyin, Notation::Zhuyin),
        (Notation::Zhuyin, Notation::Ipa),
        (Notation::Ipa, Notation::NumberedPinyin),
    ] {
        assert_eq!(mapper.convert_syllable("", from, to).unwrap(), "", "{} -> {}", from, to);
    }
}

#[test]
fn test_numbered_accented_round_trip_over_table() {
    let mapper = HanMapper::new().unwrap();

    for row in mapper.table().rows() {
        for tone in Tone::ALL {
            let syllable = Syllable::new(row.pinyin.as_str(), tone);
            let numbered = render_numbered(&syllable);
            let accented = render_accented(&syllable);

            let back = mapper
                .convert_syllable(&accented, Notation::AccentedPinyin, Notation::NumberedPinyin)
                .unwrap();
            assert_eq!(back, numbered, "{} via {}", numbered, accented);
        }
    }
}

#[test]
fn test_zhuyin_round_trip_over_table() {
    let mapper = HanMapper::new().unwrap();
    let codec = mapper.codec();

    for row in mapper.table().rows() {
        for tone in Tone::ALL {
            let zhuyin = codec.render_zhuyin(&Syllable::new(row.pinyin.as_str(), tone)).unwrap();
            let pinyin = codec.convert(&zhuyin, Notation::Zhuyin, Notation::NumberedPinyin).unwrap();
            let again = codec.convert(&pinyin, Notation::NumberedPinyin, Notation::Zhuyin).unwrap();
            assert_eq!(again, zhuyin, "{}", row.pinyin);
        }
    }
}

#[test]
fn test_zhuyin_ipa_round_trip_over_table() {
    let mapper = HanMapper::new().unwrap();
    let codec = mapper.codec();
    let table = mapper.table();

    for row in table.rows() {
        for tone in Tone::ALL {
            let syllable = Syllable::new(row.pinyin.as_str(), tone);
            let zhuyin = codec.render_zhuyin(&syllable).unwrap();

            let ipa = mapper
                .convert_syllable(&zhuyin, Notation::Zhuyin, Notation::Ipa)
                .unwrap();
            let back = mapper
                .convert_syllable(&ipa, Notation::Ipa, Notation::Zhuyin)
                .unwrap();
            assert_eq!(back, zhuyin, "{} via {}", zhuyin, ipa);

            // rows sharing a Zhuyin base read as the first such row
            if table.pinyin_for_zhuyin(&row.zhuyin) == Some(row.pinyin.as_str()) {
                assert_eq!(ipa, codec.render_ipa(&syllable).unwrap(), "{}", zhuyin);
            }
        }
    }
}

#[test]
fn test_erhua_reads_back_as_er() {
    let mapper = HanMapper::new().unwrap();

    let zhuyin = mapper
        .convert_syllable("r5", Notation::NumberedPinyin, Notation::Zhuyin)
        .unwrap();
    assert_eq!(zhuyin, "ㄦ˙");
    assert_eq!(
        mapper
            .convert_syllable(&zhuyin, Notation::Zhuyin, Notation::NumberedPinyin)
            .unwrap(),
        "er5"
    );

    let zhuyin = mapper
        .convert_syllable("ɻ", Notation::Ipa, Notation::Zhuyin)
        .unwrap();
    assert_eq!(zhuyin, "ㄦ˙");
    assert_eq!(
        mapper
            .convert_syllable(&zhuyin, Notation::Zhuyin, Notation::Ipa)
            .unwrap(),
        "aɻ"
    );
}

#[test]
fn test_ipa_recovers_numbered_pinyin() {
    let mapper = HanMapper::new().unwrap();

    for row in mapper.table().rows() {
        for tone in Tone::ALL {
            let numbered = format!("{}{}", row.pinyin, tone.digit());
            let ipa = mapper
                .convert_syllable(&numbered, Notation::NumberedPinyin, Notation::Ipa)
                .unwrap();
            let back = mapper
                .convert_syllable(&ipa, Notation::Ipa, Notation::NumberedPinyin)
                .unwrap();
            assert_eq!(back, numbered, "{} via {}", numbered, ipa);
        }
    }
}

#[test]
fn test_case_is_kept() {
    assert_eq!(render_accented(&parse_numbered("An1").unwrap()), "Ān");
    assert_eq!(render_numbered(&parse_accented("Ān")), "An1");
    assert_eq!(render_accented(&parse_numbered("Lve4").unwrap()), "Lüè");
}

#[test]
fn test_tone_zero_is_neutral() {
    let syllable = parse_numbered("de0").unwrap();
    assert_eq!(syllable.tone, Tone::Neutral);
    assert_eq!(render_numbered(&syllable), "de5");
}
