// hanmap Transcription Identifier
// Whole-string classification into Pinyin, Zhuyin or IPA

use crate::codec;
use crate::pattern::{Grammar, Token};
use crate::table::CorrespondenceTable;
use crate::tone;
use crate::types::Transcription;

/// Whole-string grammar checks for each transcription system
#[derive(Clone, Copy)]
pub struct TranscriptionIdentifier<'a> {
    table: &'a CorrespondenceTable,
}

impl<'a> TranscriptionIdentifier<'a> {
    /// Create an identifier over a table
    pub fn new(table: &'a CorrespondenceTable) -> Self {
        Self { table }
    }

    /// Classify `text`, trying Pinyin, then Zhuyin, then IPA
    ///
    /// # Examples
    /// ```
    /// # use hanmap::{HanMapper, Transcription};
    /// let mapper = HanMapper::new().unwrap();
    /// assert_eq!(mapper.identify_transcription("fa1zhan3 ni3hao3"), Transcription::Pinyin);
    /// assert_eq!(mapper.identify_transcription("blahblah"), Transcription::Unknown);
    /// ```
    pub fn identify(&self, text: &str) -> Transcription {
        if self.is_pinyin(text) {
            Transcription::Pinyin
        } else if self.is_zhuyin(text) {
            Transcription::Zhuyin
        } else if self.is_ipa(text) {
            Transcription::Ipa
        } else {
            Transcription::Unknown
        }
    }

    /// True if `text` is Pinyin syllables separated by spaces, tabs or ASCII
    /// punctuation
    pub fn is_pinyin(&self, text: &str) -> bool {
        all_tokens(Grammar::Pinyin(self.table), text, is_separator, |_| true)
    }

    /// True if `text` is Zhuyin syllables separated by whitespace
    ///
    /// Every syllable must exist in the correspondence table.
    pub fn is_zhuyin(&self, text: &str) -> bool {
        all_tokens(Grammar::Zhuyin, text, char::is_whitespace, |syllable| {
            codec::parse_zhuyin(syllable)
                .map(|parsed| self.table.has_zhuyin(&parsed.base))
                .unwrap_or(false)
        })
    }

    /// True if `text` is made of IPA letters and contours, spaces, tabs and
    /// ASCII punctuation
    ///
    /// This is a character-level check; syllables are not looked up.
    pub fn is_ipa(&self, text: &str) -> bool {
        all_tokens(Grammar::Ipa, text, is_separator, |_| true)
    }
}

/// True if every character could appear in Pinyin text
///
/// Does not check that the letters spell valid syllables.
pub fn is_pinyin_compatible(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| {
            tone::is_pinyin_letter(c)
                || c.is_ascii_digit()
                || c == tone::MIDDLE_DOT
                || c.is_ascii_punctuation()
                || c.is_whitespace()
        })
}

/// True if every character is a Zhuyin letter, a Zhuyin tone mark or a space
pub fn is_zhuyin_compatible(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| tone::is_zhuyin_letter(c) || tone::is_zhuyin_mark(c) || c == ' ')
}

fn is_separator(c: char) -> bool {
    c == ' ' || c == '\t' || c.is_ascii_punctuation()
}

/// True if `text` holds at least one syllable, every syllable passes
/// `accept`, and every literal consists of `separator` characters only
fn all_tokens(
    grammar: Grammar<'_>,
    text: &str,
    separator: impl Fn(char) -> bool,
    accept: impl Fn(&str) -> bool,
) -> bool {
    let mut syllables = 0;
    for token in grammar.tokenize(text) {
        match token {
            Token::Literal(literal) => {
                if !literal.chars().all(&separator) {
                    return false;
                }
            }
            Token::Syllable(syllable) => {
                if !accept(syllable) {
                    return false;
                }
                syllables += 1;
            }
        }
    }
    syllables > 0
}
