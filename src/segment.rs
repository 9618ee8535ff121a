// hanmap Hanzi Segmenter
// Dictionary-driven Hanzi to Pinyin reading assignment

use crate::convert::TranscriptionConverter;
use crate::dictionary::{ReadingDictionary, READING_SEPARATOR};
use crate::tone;
use crate::types::{Notation, Reading, Result};
use log::trace;

/// Hanzi punctuation: never part of a word or character run
///
/// Full-width ASCII variants, CJK brackets and quotes, the ideographic
/// space, and the middle dot.
pub const HANZI_PUNCTUATION: &str = concat!(
    "＂＃＄％＆＇（）＊＋，－／：；＜＝＞＠［＼］＾＿｀｛｜｝～｟｠｢｣､",
    "\u{3000}、〃〈〉《》「」『』【】〔〕〖〗〘〙〚〛〜〝〞〟〰〾〿",
    "–—‘’‛“”„‟…‧﹏﹑﹔·",
    "！？｡。",
);

/// True for a Hanzi punctuation mark
#[inline]
pub fn is_hanzi_punctuation(ch: char) -> bool {
    HANZI_PUNCTUATION.contains(ch)
}

/// Pair of characters enclosing a reading list ("[" and "]" by default)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container {
    pub open: char,
    pub close: char,
}

impl Container {
    /// Container from a two-character string such as `"()"`
    ///
    /// Returns `None` unless the string is exactly two characters long.
    pub fn parse(pair: &str) -> Option<Self> {
        let mut chars = pair.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(open), Some(close), None) => Some(Self { open, close }),
            _ => None,
        }
    }

    fn enclose(&self, out: &mut String, body: &str) {
        out.push(self.open);
        out.push_str(body);
        out.push(self.close);
    }
}

impl Default for Container {
    fn default() -> Self {
        Self {
            open: '[',
            close: ']',
        }
    }
}

/// Options for Hanzi conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Character marking word boundaries in the input
    pub delimiter: char,

    /// Emit every reading, enclosed in `container`, instead of the first
    pub all_readings: bool,

    /// Brackets around an all-readings list
    pub container: Container,

    /// Accented Pinyin output; numbered otherwise
    pub accented: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            delimiter: ' ',
            all_readings: false,
            container: Container::default(),
            accented: true,
        }
    }
}

impl SegmentOptions {
    /// Set the word delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Emit all readings
    pub fn with_all_readings(mut self, all_readings: bool) -> Self {
        self.all_readings = all_readings;
        self
    }

    /// Set the reading-list container
    pub fn with_container(mut self, container: Container) -> Self {
        self.container = container;
        self
    }

    /// Choose accented or numbered Pinyin output
    pub fn with_accented(mut self, accented: bool) -> Self {
        self.accented = accented;
        self
    }
}

/// A span of Hanzi input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HanziSpan<'t> {
    /// Delimiters and punctuation, copied through
    Separator(&'t str),

    /// A maximal run to look up as a word, then character by character
    Run(&'t str),
}

/// Lazy splitter of Hanzi input into separator and run spans
pub struct HanziSpans<'t> {
    rest: &'t str,
    delimiter: char,
}

impl<'t> HanziSpans<'t> {
    pub fn new(text: &'t str, delimiter: char) -> Self {
        Self {
            rest: text,
            delimiter,
        }
    }

    fn is_boundary(&self, ch: char) -> bool {
        ch == self.delimiter || is_hanzi_punctuation(ch)
    }
}

impl<'t> Iterator for HanziSpans<'t> {
    type Item = HanziSpan<'t>;

    fn next(&mut self) -> Option<HanziSpan<'t>> {
        let first = self.rest.chars().next()?;
        let separator = self.is_boundary(first);

        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| self.is_boundary(c) != separator)
            .map_or(self.rest.len(), |(i, _)| i);

        let (span, tail) = self.rest.split_at(end);
        self.rest = tail;

        Some(if separator {
            HanziSpan::Separator(span)
        } else {
            HanziSpan::Run(span)
        })
    }
}

/// Assigns Pinyin readings to Hanzi text
///
/// A run that is a dictionary word takes the word's readings. Any other run
/// is read character by character; characters with no entry pass through.
/// Matching is exact on whole runs only.
#[derive(Clone, Copy)]
pub struct HanziSegmenter<'a> {
    words: &'a ReadingDictionary,
    characters: &'a ReadingDictionary,
    converter: TranscriptionConverter<'a>,
}

impl<'a> HanziSegmenter<'a> {
    /// Create a segmenter over the word and character dictionaries
    ///
    /// Dictionary readings must already be in accented form.
    pub fn new(
        words: &'a ReadingDictionary,
        characters: &'a ReadingDictionary,
        converter: TranscriptionConverter<'a>,
    ) -> Self {
        Self {
            words,
            characters,
            converter,
        }
    }

    /// Convert Hanzi to Pinyin
    ///
    /// # Examples
    /// ```
    /// # use hanmap::{HanMapper, SegmentOptions};
    /// let mapper = HanMapper::new().unwrap();
    /// let pinyin = mapper.hanzi_to_pinyin("愛喜歡愛。", &SegmentOptions::default()).unwrap();
    /// assert_eq!(pinyin, "àixǐhuan'ài。");
    /// ```
    pub fn to_pinyin(&self, text: &str, options: &SegmentOptions) -> Result<String> {
        let pinyin = self.segment(text, options);
        if options.accented {
            Ok(pinyin)
        } else {
            self.converter
                .convert(&pinyin, Notation::AccentedPinyin, Notation::NumberedPinyin)
        }
    }

    /// Convert Hanzi to Zhuyin (the `accented` option is ignored)
    pub fn to_zhuyin(&self, text: &str, options: &SegmentOptions) -> Result<String> {
        self.via_numbered(text, options, Notation::Zhuyin)
    }

    /// Convert Hanzi to IPA (the `accented` option is ignored)
    pub fn to_ipa(&self, text: &str, options: &SegmentOptions) -> Result<String> {
        self.via_numbered(text, options, Notation::Ipa)
    }

    fn via_numbered(&self, text: &str, options: &SegmentOptions, to: Notation) -> Result<String> {
        let numbered = self.to_pinyin(text, &options.with_accented(false))?;
        self.converter.convert(&numbered, Notation::NumberedPinyin, to)
    }

    /// Accented Pinyin for `text`, before any notation change
    fn segment(&self, text: &str, options: &SegmentOptions) -> String {
        let mut out = String::with_capacity(text.len() * 3);

        for span in HanziSpans::new(text, options.delimiter) {
            let run = match span {
                HanziSpan::Separator(separator) => {
                    out.push_str(separator);
                    continue;
                }
                HanziSpan::Run(run) => run,
            };

            if let Some(readings) = self.words.get(run) {
                trace!("word '{}': {} reading(s)", run, readings.len());
                push_reading(&mut out, Reading::from_entry(readings), options, false);
                continue;
            }

            trace!("run '{}': reading by character", run);
            for (idx, ch) in run.char_indices() {
                let character = &run[idx..idx + ch.len_utf8()];
                let reading = self
                    .characters
                    .get(character)
                    .map_or(Reading::Unrecognized(character), Reading::from_entry);
                push_reading(&mut out, reading, options, true);
            }
        }

        out
    }
}

/// Append one unit's reading to the output
///
/// With `disambiguate`, a vowel-initial reading after a lowercase letter
/// gets a leading apostrophe.
fn push_reading(out: &mut String, reading: Reading<'_>, options: &SegmentOptions, disambiguate: bool) {
    match reading {
        Reading::Unrecognized(text) => out.push_str(text),
        Reading::Single(only) if options.all_readings => options.container.enclose(out, only),
        Reading::Multiple(readings) if options.all_readings => {
            let separator = READING_SEPARATOR.to_string();
            options.container.enclose(out, &readings.join(separator.as_str()));
        }
        Reading::Single(_) | Reading::Multiple(_) => {
            let top = reading.top();
            if disambiguate && needs_apostrophe(out, top) {
                out.push('\'');
            }
            out.push_str(top);
        }
    }
}

fn needs_apostrophe(out: &str, next: &str) -> bool {
    out.chars().last().is_some_and(tone::is_pinyin_lowercase)
        && next.chars().next().is_some_and(tone::is_pinyin_vowel)
}
