// hanmap Type Definitions
// Core types for syllables, notations, readings and errors

use std::path::PathBuf;
use thiserror::Error;

/// Surface notation of a single syllable or a transcribed string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Pinyin with trailing tone digits: "ma1", "huan5"
    NumberedPinyin,

    /// Pinyin with diacritic tone marks: "mā", "huan", "·zi"
    AccentedPinyin,

    /// Zhuyin (Bopomofo) with trailing tone marks: "ㄇㄚ", "ㄏㄨㄢ˙"
    Zhuyin,

    /// IPA with trailing contour letters: "ma˥"
    Ipa,
}

impl Notation {
    /// True for both Pinyin notations
    pub fn is_pinyin(self) -> bool {
        matches!(self, Notation::NumberedPinyin | Notation::AccentedPinyin)
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notation::NumberedPinyin => write!(f, "NumberedPinyin"),
            Notation::AccentedPinyin => write!(f, "AccentedPinyin"),
            Notation::Zhuyin => write!(f, "Zhuyin"),
            Notation::Ipa => write!(f, "IPA"),
        }
    }
}

/// Result of whole-string transcription identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transcription {
    Unknown,
    Pinyin,
    Zhuyin,
    Ipa,
}

impl std::fmt::Display for Transcription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transcription::Unknown => write!(f, "Unknown"),
            Transcription::Pinyin => write!(f, "Pinyin"),
            Transcription::Zhuyin => write!(f, "Zhuyin"),
            Transcription::Ipa => write!(f, "IPA"),
        }
    }
}

/// One of the four Mandarin tones, or the neutral tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tone {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    /// Neutral tone, written as 5 (or 0) in numbered Pinyin
    Neutral = 5,
}

impl Tone {
    /// All tones in numeric order
    pub const ALL: [Tone; 5] = [
        Tone::First,
        Tone::Second,
        Tone::Third,
        Tone::Fourth,
        Tone::Neutral,
    ];

    /// Tone from its number, 0 being an alias of the neutral tone
    pub fn from_number(number: u8) -> Option<Tone> {
        match number {
            1 => Some(Tone::First),
            2 => Some(Tone::Second),
            3 => Some(Tone::Third),
            4 => Some(Tone::Fourth),
            0 | 5 => Some(Tone::Neutral),
            _ => None,
        }
    }

    /// Tone number in 1..=5
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Tone digit as written in numbered Pinyin
    pub fn digit(self) -> char {
        char::from(b'0' + self.number())
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A parsed syllable: tone-free base plus tone
///
/// The base never carries tone information. Rendering is the only place
/// where marks, digits or contours are attached again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Syllable {
    /// Phonetic spelling without tone ("ma", "ㄇㄚ", "ma")
    pub base: String,

    /// Tone of the syllable
    pub tone: Tone,
}

impl Syllable {
    /// Create a syllable from a base and a tone
    pub fn new(base: impl Into<String>, tone: Tone) -> Self {
        Self {
            base: base.into(),
            tone,
        }
    }
}

/// Readings found for one unit (word or character) of a Hanzi run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading<'a> {
    /// Exactly one known reading
    Single(&'a str),

    /// Several readings, most common first
    Multiple(&'a [String]),

    /// Not in any dictionary; copied through untouched
    Unrecognized(&'a str),
}

impl<'a> Reading<'a> {
    /// Build a reading from a dictionary entry
    pub fn from_entry(readings: &'a [String]) -> Self {
        match readings {
            [only] => Reading::Single(only.as_str()),
            _ => Reading::Multiple(readings),
        }
    }

    /// Most common reading, or the original text when unrecognized
    pub fn top(&self) -> &'a str {
        match self {
            Reading::Single(reading) => reading,
            Reading::Multiple(readings) => readings.first().map(String::as_str).unwrap_or(""),
            Reading::Unrecognized(text) => text,
        }
    }
}

/// Errors raised by syllable and text conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptionError {
    #[error("Invalid syllable: '{0}'")]
    InvalidSyllable(String),

    #[error("Unknown syllable: '{0}' has no entry in the correspondence table")]
    UnknownSyllable(String),

    #[error("String is not a valid Chinese transcription")]
    UnrecognizedTranscription,
}

/// Errors raised while loading the data tables
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read data file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed row in {file} at line {line}: {reason}")]
    Malformed {
        file: String,
        line: usize,
        reason: String,
    },

    #[error("Data file {file} has no entries")]
    Empty { file: String },

    #[error("Invalid reading '{reading}' in {file}: {source}")]
    InvalidReading {
        file: String,
        reading: String,
        #[source]
        source: TranscriptionError,
    },
}

/// Result alias for conversion operations
pub type Result<T> = std::result::Result<T, TranscriptionError>;
