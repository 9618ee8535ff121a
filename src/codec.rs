// hanmap Syllable Codec
// Single-syllable parsing and rendering for every notation

use crate::table::CorrespondenceTable;
use crate::tone::{self, MIDDLE_DOT};
use crate::types::{Notation, Result, Syllable, Tone, TranscriptionError};

/// Parse numbered Pinyin ("ma1", "huan5", "ma0", "ma")
///
/// A missing tone digit means the neutral tone, as does `0`. Digits 6-9 are
/// rejected.
pub fn parse_numbered(syllable: &str) -> Result<Syllable> {
    let last = syllable
        .chars()
        .last()
        .ok_or_else(|| TranscriptionError::InvalidSyllable(syllable.to_string()))?;

    match last.to_digit(10) {
        None => Ok(Syllable::new(syllable, Tone::Neutral)),
        Some(digit) => {
            let tone = Tone::from_number(digit as u8)
                .ok_or_else(|| TranscriptionError::InvalidSyllable(syllable.to_string()))?;
            Ok(Syllable::new(&syllable[..syllable.len() - 1], tone))
        }
    }
}

/// Parse accented Pinyin ("mā", "Ān", "·zi", "huan")
///
/// The first accented vowel decides the tone and is replaced by its plain
/// form. A leading middle dot means the neutral tone.
pub fn parse_accented(syllable: &str) -> Syllable {
    if let Some(rest) = syllable.strip_prefix(MIDDLE_DOT) {
        return Syllable::new(rest, Tone::Neutral);
    }

    for (pos, ch) in syllable.char_indices() {
        if let Some((plain, tone)) = tone::decode_accented(ch) {
            let mut base = String::with_capacity(syllable.len());
            base.push_str(&syllable[..pos]);
            base.push(plain);
            base.push_str(&syllable[pos + ch.len_utf8()..]);
            return Syllable::new(base, tone);
        }
    }

    Syllable::new(syllable, Tone::Neutral)
}

/// Parse Pinyin in whichever form it is written
pub fn parse_pinyin(syllable: &str) -> Result<Syllable> {
    if tone::has_accented_vowels(syllable) {
        Ok(parse_accented(syllable))
    } else {
        parse_numbered(syllable)
    }
}

/// Parse Zhuyin ("ㄇㄚ", "ㄏㄨㄢ˙")
///
/// An unmarked syllable is first tone. Anything other than a Zhuyin letter
/// or mark at the end is rejected.
pub fn parse_zhuyin(syllable: &str) -> Result<Syllable> {
    let invalid = || TranscriptionError::InvalidSyllable(syllable.to_string());
    let last = syllable.chars().last().ok_or_else(invalid)?;

    if tone::is_zhuyin_letter(last) {
        return Ok(Syllable::new(syllable, Tone::First));
    }

    match tone::zhuyin_tone(last) {
        Some(tone) => Ok(Syllable::new(
            &syllable[..syllable.len() - last.len_utf8()],
            tone,
        )),
        None => Err(invalid()),
    }
}

/// Parse IPA ("ma˥", "xwan")
///
/// The trailing run of tone letters must spell a known contour; no run means
/// the neutral tone.
pub fn parse_ipa(syllable: &str) -> Result<Syllable> {
    let base = syllable.trim_end_matches(tone::is_ipa_contour_letter);
    let contour = &syllable[base.len()..];

    if contour.is_empty() {
        return Ok(Syllable::new(base, Tone::Neutral));
    }

    tone::ipa_tone(contour)
        .map(|tone| Syllable::new(base, tone))
        .ok_or_else(|| TranscriptionError::InvalidSyllable(syllable.to_string()))
}

/// Render numbered Pinyin: base followed by the tone digit
pub fn render_numbered(syllable: &Syllable) -> String {
    let mut out = String::with_capacity(syllable.base.len() + 1);
    out.push_str(&syllable.base);
    out.push(syllable.tone.digit());
    out
}

/// Render accented Pinyin
///
/// Mark placement: `a`, else `e`, else `o`, else the rightmost of
/// a/e/i/o/u/ü. `v` is written as ü. Letter case is kept per character.
/// The erhua `r` in the neutral tone stays bare; any other base without a
/// markable vowel falls back to numbered form.
pub fn render_accented(syllable: &Syllable) -> String {
    if syllable.tone == Tone::Neutral && syllable.base.eq_ignore_ascii_case("r") {
        return syllable.base.clone();
    }

    let upper: Vec<bool> = syllable.base.chars().map(char::is_uppercase).collect();
    let mut letters: Vec<char> = syllable
        .base
        .chars()
        .map(|c| match tone::to_lower(c) {
            'v' => 'ü',
            lower => lower,
        })
        .collect();

    let Some(idx) = mark_position(&letters) else {
        return render_numbered(syllable);
    };

    if let Some(accented) = tone::accent_vowel(letters[idx], syllable.tone) {
        letters[idx] = accented;
    }

    letters
        .into_iter()
        .zip(upper)
        .map(|(c, was_upper)| if was_upper { tone::to_upper(c) } else { c })
        .collect()
}

/// Index of the vowel that receives the tone mark
fn mark_position(letters: &[char]) -> Option<usize> {
    ['a', 'e', 'o']
        .iter()
        .find_map(|v| letters.iter().position(|c| c == v))
        .or_else(|| {
            letters
                .iter()
                .rposition(|c| tone::MARKABLE_VOWELS.contains(c))
        })
}

/// Single-syllable codec bound to a correspondence table
///
/// Cross-notation conversion pivots through numbered Pinyin: every parse
/// yields a syllable whose base is a Pinyin base, and every render starts
/// from one.
#[derive(Clone, Copy)]
pub struct SyllableCodec<'a> {
    table: &'a CorrespondenceTable,
}

impl<'a> SyllableCodec<'a> {
    /// Create a codec over a table
    pub fn new(table: &'a CorrespondenceTable) -> Self {
        Self { table }
    }

    /// Parse a syllable written in `notation` into its Pinyin-based form
    pub fn parse(&self, syllable: &str, notation: Notation) -> Result<Syllable> {
        match notation {
            Notation::NumberedPinyin | Notation::AccentedPinyin => parse_pinyin(syllable),
            Notation::Zhuyin => {
                let parsed = parse_zhuyin(syllable)?;
                let pinyin = self
                    .table
                    .pinyin_for_zhuyin(&parsed.base)
                    .ok_or_else(|| TranscriptionError::UnknownSyllable(syllable.to_string()))?;
                Ok(Syllable::new(pinyin, parsed.tone))
            }
            Notation::Ipa => {
                let parsed = parse_ipa(syllable)?;
                let pinyin = self
                    .table
                    .pinyin_for_ipa(&parsed.base)
                    .ok_or_else(|| TranscriptionError::UnknownSyllable(syllable.to_string()))?;
                Ok(Syllable::new(pinyin, parsed.tone))
            }
        }
    }

    /// Render a Pinyin-based syllable in `notation`
    pub fn render(&self, syllable: &Syllable, notation: Notation) -> Result<String> {
        match notation {
            Notation::NumberedPinyin => Ok(render_numbered(syllable)),
            Notation::AccentedPinyin => Ok(render_accented(syllable)),
            Notation::Zhuyin => self.render_zhuyin(syllable),
            Notation::Ipa => self.render_ipa(syllable),
        }
    }

    /// Render Zhuyin: table lookup plus the tone mark
    pub fn render_zhuyin(&self, syllable: &Syllable) -> Result<String> {
        let base = self
            .table
            .zhuyin_for_pinyin(&syllable.base)
            .ok_or_else(|| TranscriptionError::UnknownSyllable(syllable.base.clone()))?;

        let mut out = base.to_string();
        if let Some(mark) = tone::zhuyin_mark(syllable.tone) {
            out.push(mark);
        }
        Ok(out)
    }

    /// Render IPA: table lookup plus the tone contour
    pub fn render_ipa(&self, syllable: &Syllable) -> Result<String> {
        let base = self
            .table
            .ipa_for_pinyin(&syllable.base)
            .ok_or_else(|| TranscriptionError::UnknownSyllable(syllable.base.clone()))?;

        Ok(format!("{}{}", base, tone::ipa_contour(syllable.tone)))
    }

    /// Convert one syllable between notations
    ///
    /// Pinyin-to-Pinyin conversion never consults the table, so it keeps the
    /// caller's letter case. Conversion into Zhuyin or IPA validates the base.
    /// An empty syllable converts to an empty string.
    pub fn convert(&self, syllable: &str, from: Notation, to: Notation) -> Result<String> {
        if syllable.is_empty() {
            return Ok(String::new());
        }
        let parsed = self.parse(syllable, from)?;
        self.render(&parsed, to)
    }
}
