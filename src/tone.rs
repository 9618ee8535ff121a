// hanmap Tone Mark Tables
// Fixed per-system tone encodings and the letter classes built on them

use crate::types::Tone;

/// Standalone middle dot marking a neutral-tone accented Pinyin syllable ("·zi")
pub const MIDDLE_DOT: char = '\u{00B7}';

/// Vowels eligible for a Pinyin tone mark
pub const MARKABLE_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'ü'];

/// Accented forms of each markable vowel, tones 1-4
const PINYIN_TONE_MARKS: &[(char, [char; 4])] = &[
    ('a', ['ā', 'á', 'ǎ', 'à']),
    ('e', ['ē', 'é', 'ě', 'è']),
    ('i', ['ī', 'í', 'ǐ', 'ì']),
    ('o', ['ō', 'ó', 'ǒ', 'ò']),
    ('u', ['ū', 'ú', 'ǔ', 'ù']),
    ('ü', ['ǖ', 'ǘ', 'ǚ', 'ǜ']),
];

/// Zhuyin tone marks for tones 2-5; tone 1 is unmarked
const ZHUYIN_TONE_MARKS: &[(Tone, char)] = &[
    (Tone::Second, 'ˊ'),
    (Tone::Third, 'ˇ'),
    (Tone::Fourth, 'ˋ'),
    (Tone::Neutral, '˙'),
];

/// IPA contours (Chao tone letters); the neutral tone has none
const IPA_TONE_CONTOURS: &[(Tone, &str)] = &[
    (Tone::First, "˥"),
    (Tone::Second, "˧˥"),
    (Tone::Third, "˧˩˧"),
    (Tone::Fourth, "˥˩"),
    (Tone::Neutral, ""),
];

/// Tone letters that may appear in an IPA contour
pub const IPA_CONTOUR_LETTERS: &str = "˥˧˩";

/// Letters making up the base of an IPA syllable
pub const IPA_LETTERS: &str = "aeɛəɤɨiɪjklmnŋoɔœpɑstuʊwxyɥɕʂʈʐɻɯfʰ";

/// Zhuyin tone marks in one string, for character classes
pub const ZHUYIN_MARKS: &str = "ˊˇˋ˙";

/// Accent a lowercase markable vowel with the given tone
///
/// The neutral tone returns the vowel unchanged.
pub fn accent_vowel(vowel: char, tone: Tone) -> Option<char> {
    let (_, marks) = PINYIN_TONE_MARKS.iter().find(|(v, _)| *v == vowel)?;
    match tone {
        Tone::Neutral => Some(vowel),
        _ => Some(marks[tone.number() as usize - 1]),
    }
}

/// Decode an accented vowel of either case into (plain vowel, tone)
///
/// The plain vowel keeps the case of the input.
pub fn decode_accented(ch: char) -> Option<(char, Tone)> {
    let lower = to_lower(ch);
    for (vowel, marks) in PINYIN_TONE_MARKS {
        if let Some(idx) = marks.iter().position(|m| *m == lower) {
            let tone = Tone::from_number(idx as u8 + 1)?;
            let plain = if ch.is_uppercase() { to_upper(*vowel) } else { *vowel };
            return Some((plain, tone));
        }
    }
    None
}

/// True for a Pinyin vowel carrying a tone mark
#[inline]
pub fn is_accented_vowel(ch: char) -> bool {
    decode_accented(ch).is_some()
}

/// True for an unmarked Pinyin vowel, including `v` and `ê` (any case)
#[inline]
pub fn is_plain_vowel(ch: char) -> bool {
    matches!(to_lower(ch), 'a' | 'e' | 'i' | 'o' | 'u' | 'ü' | 'v' | 'ê')
}

/// True for any Pinyin vowel, marked or not
#[inline]
pub fn is_pinyin_vowel(ch: char) -> bool {
    is_plain_vowel(ch) || is_accented_vowel(ch)
}

/// True for a character that may appear inside a Pinyin syllable
#[inline]
pub fn is_pinyin_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || is_pinyin_vowel(ch)
}

/// True for a lowercase Pinyin letter
#[inline]
pub fn is_pinyin_lowercase(ch: char) -> bool {
    is_pinyin_letter(ch) && ch.is_lowercase()
}

/// True if the string holds accented vowels or a neutral-tone middle dot
pub fn has_accented_vowels(text: &str) -> bool {
    text.chars().any(|c| c == MIDDLE_DOT || is_accented_vowel(c))
}

/// Zhuyin mark for a tone; `None` for the unmarked first tone
pub fn zhuyin_mark(tone: Tone) -> Option<char> {
    ZHUYIN_TONE_MARKS
        .iter()
        .find(|(t, _)| *t == tone)
        .map(|(_, mark)| *mark)
}

/// Tone carried by a Zhuyin mark
pub fn zhuyin_tone(mark: char) -> Option<Tone> {
    ZHUYIN_TONE_MARKS
        .iter()
        .find(|(_, m)| *m == mark)
        .map(|(tone, _)| *tone)
}

/// True for a Zhuyin letter (ㄅ through ㄩ)
#[inline]
pub fn is_zhuyin_letter(ch: char) -> bool {
    ('ㄅ'..='ㄩ').contains(&ch)
}

/// True for a Zhuyin tone mark
#[inline]
pub fn is_zhuyin_mark(ch: char) -> bool {
    ZHUYIN_MARKS.contains(ch)
}

/// IPA contour for a tone
pub fn ipa_contour(tone: Tone) -> &'static str {
    IPA_TONE_CONTOURS
        .iter()
        .find(|(t, _)| *t == tone)
        .map(|(_, contour)| *contour)
        .unwrap_or("")
}

/// Tone for a complete IPA contour
pub fn ipa_tone(contour: &str) -> Option<Tone> {
    IPA_TONE_CONTOURS
        .iter()
        .find(|(_, c)| *c == contour)
        .map(|(tone, _)| *tone)
}

/// True for a Chao tone letter
#[inline]
pub fn is_ipa_contour_letter(ch: char) -> bool {
    IPA_CONTOUR_LETTERS.contains(ch)
}

/// Single-character lowercase; characters with multi-char lowercase stay as-is
pub(crate) fn to_lower(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => c,
        _ => ch,
    }
}

/// Single-character uppercase; characters with multi-char uppercase stay as-is
pub(crate) fn to_upper(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => c,
        _ => ch,
    }
}
