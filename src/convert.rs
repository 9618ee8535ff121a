// hanmap Text Converter
// Whole-string transcription conversion as a fold over the token stream

use crate::codec::SyllableCodec;
use crate::pattern::{Grammar, Token};
use crate::table::CorrespondenceTable;
use crate::tone;
use crate::types::{Notation, Result};

/// Spacing and apostrophe policy for one conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// Drop a lone `'` between two syllables
    pub remove_apostrophes: bool,

    /// Put a space between adjacent syllables (and in place of a dropped `'`)
    pub separate_syllables: bool,

    /// Put `'` before a vowel-initial syllable that directly follows another
    pub add_apostrophes: bool,
}

impl ConvertOptions {
    /// Policy for converting from one notation to another
    ///
    /// Leaving Pinyin for Zhuyin or IPA trades apostrophes for spaces.
    /// Numbered to accented Pinyin adds apostrophes. Everything else copies
    /// spacing through as it is.
    pub fn between(from: Notation, to: Notation) -> Self {
        let leaving_pinyin = from.is_pinyin() && !to.is_pinyin();
        Self {
            remove_apostrophes: leaving_pinyin,
            separate_syllables: leaving_pinyin,
            add_apostrophes: from == Notation::NumberedPinyin && to == Notation::AccentedPinyin,
        }
    }
}

/// Converts every syllable of a free-form string, copying the rest verbatim
#[derive(Clone, Copy)]
pub struct TranscriptionConverter<'a> {
    table: &'a CorrespondenceTable,
    codec: SyllableCodec<'a>,
}

impl<'a> TranscriptionConverter<'a> {
    /// Create a converter over a table
    pub fn new(table: &'a CorrespondenceTable) -> Self {
        Self {
            table,
            codec: SyllableCodec::new(table),
        }
    }

    /// Convert `text` from one notation to another
    ///
    /// Same-notation conversion returns the input unchanged.
    ///
    /// # Errors
    /// Fails on the first syllable the codec rejects; no partial output is
    /// returned.
    pub fn convert(&self, text: &str, from: Notation, to: Notation) -> Result<String> {
        if from == to {
            return Ok(text.to_string());
        }
        self.convert_with(text, from, to, ConvertOptions::between(from, to))
    }

    /// Convert with an explicit spacing policy
    pub fn convert_with(
        &self,
        text: &str,
        from: Notation,
        to: Notation,
        options: ConvertOptions,
    ) -> Result<String> {
        let grammar = Grammar::for_notation(from, self.table);
        let mut tokens = grammar.tokenize(text).peekable();
        let mut out = String::with_capacity(text.len() * 2);
        let mut after_syllable = false;

        while let Some(token) = tokens.next() {
            match token {
                Token::Literal(literal) => {
                    let separator = literal == "'"
                        && !out.is_empty()
                        && matches!(tokens.peek(), Some(Token::Syllable(_)));

                    if separator && options.remove_apostrophes {
                        if options.separate_syllables {
                            out.push(' ');
                        }
                    } else {
                        out.push_str(literal);
                    }
                    after_syllable = false;
                }
                Token::Syllable(syllable) => {
                    if after_syllable {
                        if options.separate_syllables {
                            out.push(' ');
                        } else if options.add_apostrophes && starts_with_vowel(syllable) {
                            out.push('\'');
                        }
                    }
                    out.push_str(&self.codec.convert(syllable, from, to)?);
                    after_syllable = true;
                }
            }
        }

        Ok(out)
    }
}

/// True if the syllable begins with a, e, i, o, u or ü (any case or tone)
fn starts_with_vowel(syllable: &str) -> bool {
    syllable.chars().next().is_some_and(|c| {
        let plain = tone::decode_accented(c).map_or(c, |(plain, _)| plain);
        tone::MARKABLE_VOWELS.contains(&tone::to_lower(plain))
    })
}
