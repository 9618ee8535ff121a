// Integration tests for text conversion and identification

use hanmap::{HanMapper, Notation, Transcription, TranscriptionError};

const NUMBERED: &str = "Wo3 shi4 yi1ge4 mei3guo2ren2.";
const ACCENTED: &str = "Wǒ shì yīgè měiguórén.";
const ZHUYIN: &str = "ㄨㄛˇ ㄕˋ ㄧ ㄍㄜˋ ㄇㄟˇ ㄍㄨㄛˊ ㄖㄣˊ.";
const IPA: &str = "wɔ˧˩˧ ʂɨ˥˩ i˥ kɤ˥˩ meɪ˧˩˧ kwɔ˧˥ ʐən˧˥.";

#[test]
fn test_pinyin_sentence() {
    let mapper = HanMapper::new().unwrap();

    assert_eq!(mapper.to_pinyin(NUMBERED, true).unwrap(), ACCENTED);
    assert_eq!(mapper.to_pinyin(ACCENTED, false).unwrap(), NUMBERED);
    assert_eq!(mapper.to_zhuyin(NUMBERED).unwrap(), ZHUYIN);
    assert_eq!(mapper.to_zhuyin(ACCENTED).unwrap(), ZHUYIN);
    assert_eq!(mapper.to_ipa(NUMBERED).unwrap(), IPA);
    assert_eq!(mapper.to_ipa(ACCENTED).unwrap(), IPA);
}

#[test]
fn test_zhuyin_and_ipa_sentences() {
    let mapper = HanMapper::new().unwrap();

    assert_eq!(
        mapper
            .convert_text(ZHUYIN, Notation::Zhuyin, Notation::NumberedPinyin)
            .unwrap(),
        "wo3 shi4 yi1 ge4 mei3 guo2 ren2."
    );
    assert_eq!(
        mapper.to_pinyin(IPA, true).unwrap(),
        "wǒ shì yī gè měi guó rén."
    );
    assert_eq!(
        mapper.convert_text(ZHUYIN, Notation::Zhuyin, Notation::Ipa).unwrap(),
        IPA
    );
    assert_eq!(mapper.to_zhuyin(IPA).unwrap(), ZHUYIN);
}

#[test]
fn test_zhuyin_allows_only_whitespace_between_syllables() {
    let mapper = HanMapper::new().unwrap();

    assert!(!mapper.is_zhuyin(ZHUYIN));
    assert_eq!(
        mapper.to_ipa(ZHUYIN),
        Err(TranscriptionError::UnrecognizedTranscription)
    );
    assert_eq!(
        mapper.to_ipa("ㄨㄛˇ ㄕˋ").unwrap(),
        "wɔ˧˩˧ ʂɨ˥˩"
    );
}

#[test]
fn test_unspaced_zhuyin() {
    let mapper = HanMapper::new().unwrap();

    assert!(mapper.is_zhuyin("ㄊㄧㄢㄒㄧㄚˋ"));
    assert_eq!(
        mapper.identify_transcription("ㄊㄧㄢㄒㄧㄚˋ"),
        Transcription::Zhuyin
    );
    assert_eq!(
        mapper
            .convert_text("ㄊㄧㄢㄒㄧㄚˋ", Notation::Zhuyin, Notation::NumberedPinyin)
            .unwrap(),
        "tian1xia4"
    );
    assert_eq!(mapper.to_pinyin("ㄊㄧㄢㄒㄧㄚˋ", true).unwrap(), "tiānxià");
    assert_eq!(mapper.to_ipa("ㄊㄧㄢㄒㄧㄚˋ").unwrap(), "tʰjɛn˥ɕja˥˩");
}

#[test]
fn test_syllable_separating_apostrophe() {
    let mapper = HanMapper::new().unwrap();

    assert_eq!(
        mapper
            .convert_text("xi1'an1", Notation::NumberedPinyin, Notation::AccentedPinyin)
            .unwrap(),
        "xī'ān"
    );
    assert_eq!(
        mapper
            .convert_text("xi1'an1", Notation::NumberedPinyin, Notation::Zhuyin)
            .unwrap(),
        "ㄒㄧ ㄢ"
    );
    assert_eq!(mapper.to_ipa("xi1'an1").unwrap(), "ɕi˥ an˥");
    assert_eq!(mapper.to_pinyin("guang3er2", true).unwrap(), "guǎng'ér");
    assert_eq!(mapper.to_pinyin("Yong3Er2", true).unwrap(), "Yǒng'Ér");
}

#[test]
fn test_neutral_tone_forms() {
    let mapper = HanMapper::new().unwrap();

    assert_eq!(mapper.to_pinyin("\u{00B7}zi", false).unwrap(), "zi5");
    assert_eq!(mapper.to_pinyin("ān\u{00B7}jing", false).unwrap(), "an1jing5");
    assert_eq!(mapper.to_pinyin("huan5", true).unwrap(), "huan");
}

#[test]
fn test_erhua() {
    let mapper = HanMapper::new().unwrap();

    assert_eq!(mapper.to_pinyin("hua1r5", true).unwrap(), "huār");
    assert_eq!(mapper.to_pinyin("huār", false).unwrap(), "hua1r5");
    assert_eq!(mapper.to_zhuyin("zhuójìnr").unwrap(), "ㄓㄨㄛˊ ㄐㄧㄣˋ ㄦ˙");
    assert_eq!(mapper.to_ipa("zhuójìnr").unwrap(), "ʈʂwɔ˧˥ tɕin˥˩ ɻ");
}

#[test]
fn test_case_and_v() {
    let mapper = HanMapper::new().unwrap();

    assert_eq!(mapper.to_pinyin("Ān", false).unwrap(), "An1");
    assert_eq!(mapper.to_pinyin("An1", true).unwrap(), "Ān");
    assert_eq!(mapper.to_pinyin("Àodìlì", false).unwrap(), "Ao4di4li4");
    assert_eq!(mapper.to_pinyin("lv4", true).unwrap(), "lǜ");
    assert_eq!(mapper.to_zhuyin("ó").unwrap(), "ㄛˊ");
}

#[test]
fn test_identify_transcription() {
    let mapper = HanMapper::new().unwrap();

    assert_eq!(mapper.identify_transcription("fa1zhan3 ni3hao3"), Transcription::Pinyin);
    assert_eq!(mapper.identify_transcription("fāzhǎnnǐhǎo"), Transcription::Pinyin);
    assert_eq!(mapper.identify_transcription("ㄝ ㄦ ㄒㄧㄣ"), Transcription::Zhuyin);
    assert_eq!(
        mapper.identify_transcription("fa˥ ʈʂan˧˩˧ ni˧˩˧ xɑʊ˧˩˧"),
        Transcription::Ipa
    );
    assert_eq!(mapper.identify_transcription("blahblah"), Transcription::Unknown);
    assert_eq!(mapper.identify_transcription(""), Transcription::Unknown);
}

#[test]
fn test_identified_text_converts_to_itself() {
    let mapper = HanMapper::new().unwrap();

    for text in [NUMBERED, "ㄝ ㄦ ㄒㄧㄣ", IPA] {
        let notation = match mapper.identify_transcription(text) {
            Transcription::Pinyin => Notation::NumberedPinyin,
            Transcription::Zhuyin => Notation::Zhuyin,
            Transcription::Ipa => Notation::Ipa,
            Transcription::Unknown => panic!("{} not identified", text),
        };
        assert_eq!(mapper.convert_text(text, notation, notation).unwrap(), text);
    }
}

#[test]
fn test_validity_checks() {
    let mapper = HanMapper::new().unwrap();

    assert!(mapper.is_pinyin(NUMBERED));
    assert!(mapper.is_zhuyin("ㄨㄛˇ ㄕˋ ㄧ ㄍㄜˋ"));
    assert!(mapper.is_ipa(IPA));
    assert!(!mapper.is_zhuyin(NUMBERED));

    assert!(mapper.is_pinyin_compatible(ACCENTED));
    assert!(!mapper.is_pinyin_compatible(ZHUYIN));
    assert!(mapper.is_zhuyin_compatible("ㄨㄛˇ ㄕˋ"));
    assert!(!mapper.is_zhuyin_compatible(ZHUYIN));
}

#[test]
fn test_passthrough_and_empty() {
    let mapper = HanMapper::new().unwrap();

    assert_eq!(mapper.to_zhuyin("").unwrap(), "");
    assert_eq!(
        mapper
            .convert_text("123 ?!", Notation::NumberedPinyin, Notation::Zhuyin)
            .unwrap(),
        "123 ?!"
    );
    assert_eq!(
        mapper.to_zhuyin("123"),
        Err(TranscriptionError::UnrecognizedTranscription)
    );
}
