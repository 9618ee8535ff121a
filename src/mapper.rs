// hanmap Mapper
// Main API owning the loaded tables and exposing every conversion

use crate::codec::SyllableCodec;
use crate::convert::TranscriptionConverter;
use crate::data::{DataSet, CHARACTERS_FILE, WORDS_FILE};
use crate::dictionary::ReadingDictionary;
use crate::identify::{self, TranscriptionIdentifier};
use crate::segment::{HanziSegmenter, SegmentOptions};
use crate::table::CorrespondenceTable;
use crate::tone;
use crate::types::{DataError, Notation, Result, Transcription, TranscriptionError};
use log::info;
use std::path::Path;
use std::sync::OnceLock;

/// Process-wide mapper, built at most once
static SHARED: OnceLock<HanMapper> = OnceLock::new();

/// Main hanmap conversion engine
///
/// Owns the immutable tables:
/// - Correspondence table (Pinyin/Zhuyin/IPA syllable bases)
/// - Word dictionary (multi-character words)
/// - Character dictionary (single characters)
///
/// Every operation borrows the tables read-only, so one mapper can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct HanMapper {
    /// Syllable base correspondences
    table: CorrespondenceTable,

    /// Word readings, accented
    words: ReadingDictionary,

    /// Character readings, accented
    characters: ReadingDictionary,
}

impl HanMapper {
    /// Create a mapper from the embedded data
    pub fn new() -> std::result::Result<Self, DataError> {
        Self::from_data(&DataSet::embedded())
    }

    /// Create a mapper from data files in a directory
    ///
    /// # Arguments
    /// * `dir` - Directory holding `transcriptions.csv`,
    ///   `hanzi_pinyin_words.tsv` and `hanzi_pinyin_characters.tsv`
    pub fn from_dir(dir: impl AsRef<Path>) -> std::result::Result<Self, DataError> {
        Self::from_data(&DataSet::from_dir(dir)?)
    }

    /// Create a mapper from source texts
    ///
    /// Dictionary readings written in numbered Pinyin are converted to
    /// accented Pinyin here, so both styles of data file work.
    pub fn from_data(data: &DataSet) -> std::result::Result<Self, DataError> {
        let table = CorrespondenceTable::from_csv(&data.transcriptions)?;
        let mut words = ReadingDictionary::from_tsv(WORDS_FILE, &data.words)?;
        let mut characters = ReadingDictionary::from_tsv(CHARACTERS_FILE, &data.characters)?;

        let converter = TranscriptionConverter::new(&table);
        accent_readings(&mut words, converter, WORDS_FILE)?;
        accent_readings(&mut characters, converter, CHARACTERS_FILE)?;

        info!(
            "Loaded {} syllables, {} words, {} characters",
            table.len(),
            words.len(),
            characters.len()
        );

        Ok(Self {
            table,
            words,
            characters,
        })
    }

    /// Process-wide mapper
    ///
    /// Returns the installed mapper, or builds one from the embedded data on
    /// first use.
    ///
    /// # Panics
    /// Panics if the embedded data fails to load.
    pub fn shared() -> &'static HanMapper {
        SHARED.get_or_init(|| HanMapper::new().expect("Failed to load embedded hanmap data"))
    }

    /// Install `mapper` as the process-wide mapper
    ///
    /// Gives the mapper back if one is already in place.
    pub fn install(mapper: HanMapper) -> std::result::Result<&'static HanMapper, HanMapper> {
        SHARED.set(mapper)?;
        Ok(Self::shared())
    }

    // ============ Syllables and text ============

    /// Convert one syllable between notations
    ///
    /// # Examples
    /// ```
    /// # use hanmap::{HanMapper, Notation};
    /// let mapper = HanMapper::new().unwrap();
    /// let zhuyin = mapper
    ///     .convert_syllable("ma1", Notation::NumberedPinyin, Notation::Zhuyin)
    ///     .unwrap();
    /// assert_eq!(zhuyin, "ㄇㄚ");
    /// ```
    pub fn convert_syllable(&self, syllable: &str, from: Notation, to: Notation) -> Result<String> {
        self.codec().convert(syllable, from, to)
    }

    /// Convert every syllable in `text`, copying everything else
    pub fn convert_text(&self, text: &str, from: Notation, to: Notation) -> Result<String> {
        self.converter().convert(text, from, to)
    }

    // ============ Identification ============

    /// Identify the transcription system of `text`
    pub fn identify_transcription(&self, text: &str) -> Transcription {
        self.identifier().identify(text)
    }

    /// True if `text` is valid Pinyin
    pub fn is_pinyin(&self, text: &str) -> bool {
        self.identifier().is_pinyin(text)
    }

    /// True if `text` is valid Zhuyin
    pub fn is_zhuyin(&self, text: &str) -> bool {
        self.identifier().is_zhuyin(text)
    }

    /// True if `text` is made of IPA characters
    pub fn is_ipa(&self, text: &str) -> bool {
        self.identifier().is_ipa(text)
    }

    /// True if every character of `text` could appear in Pinyin
    pub fn is_pinyin_compatible(&self, text: &str) -> bool {
        identify::is_pinyin_compatible(text)
    }

    /// True if every character of `text` could appear in Zhuyin
    pub fn is_zhuyin_compatible(&self, text: &str) -> bool {
        identify::is_zhuyin_compatible(text)
    }

    // ============ Dispatching conversion ============

    /// Convert a transcription of any system to Pinyin
    ///
    /// # Arguments
    /// * `text` - Pinyin, Zhuyin or IPA
    /// * `accented` - Tone marks if true, tone digits otherwise
    ///
    /// # Errors
    /// `UnrecognizedTranscription` if `text` is none of the three systems.
    pub fn to_pinyin(&self, text: &str, accented: bool) -> Result<String> {
        let target = if accented {
            Notation::AccentedPinyin
        } else {
            Notation::NumberedPinyin
        };
        self.dispatch(text, target)
    }

    /// Convert a transcription of any system to Zhuyin
    pub fn to_zhuyin(&self, text: &str) -> Result<String> {
        self.dispatch(text, Notation::Zhuyin)
    }

    /// Convert a transcription of any system to IPA
    pub fn to_ipa(&self, text: &str) -> Result<String> {
        self.dispatch(text, Notation::Ipa)
    }

    fn dispatch(&self, text: &str, to: Notation) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let from = match self.identify_transcription(text) {
            Transcription::Pinyin if tone::has_accented_vowels(text) => Notation::AccentedPinyin,
            Transcription::Pinyin => Notation::NumberedPinyin,
            Transcription::Zhuyin => Notation::Zhuyin,
            Transcription::Ipa => Notation::Ipa,
            Transcription::Unknown => return Err(TranscriptionError::UnrecognizedTranscription),
        };

        self.convert_text(text, from, to)
    }

    // ============ Hanzi ============

    /// Convert Hanzi to Pinyin readings
    ///
    /// # Arguments
    /// * `text` - Hanzi, optionally with words split by `options.delimiter`
    /// * `options` - Delimiter, reading selection and output style
    pub fn hanzi_to_pinyin(&self, text: &str, options: &SegmentOptions) -> Result<String> {
        self.segmenter().to_pinyin(text, options)
    }

    /// Convert Hanzi to Zhuyin readings
    pub fn hanzi_to_zhuyin(&self, text: &str, options: &SegmentOptions) -> Result<String> {
        self.segmenter().to_zhuyin(text, options)
    }

    /// Convert Hanzi to IPA readings
    pub fn hanzi_to_ipa(&self, text: &str, options: &SegmentOptions) -> Result<String> {
        self.segmenter().to_ipa(text, options)
    }

    // ============ Components ============

    /// Single-syllable codec over this mapper's table
    pub fn codec(&self) -> SyllableCodec<'_> {
        SyllableCodec::new(&self.table)
    }

    /// Text converter over this mapper's table
    pub fn converter(&self) -> TranscriptionConverter<'_> {
        TranscriptionConverter::new(&self.table)
    }

    /// Transcription identifier over this mapper's table
    pub fn identifier(&self) -> TranscriptionIdentifier<'_> {
        TranscriptionIdentifier::new(&self.table)
    }

    /// Hanzi segmenter over this mapper's dictionaries
    pub fn segmenter(&self) -> HanziSegmenter<'_> {
        HanziSegmenter::new(&self.words, &self.characters, self.converter())
    }

    /// The correspondence table
    pub fn table(&self) -> &CorrespondenceTable {
        &self.table
    }

    /// The word dictionary
    pub fn words(&self) -> &ReadingDictionary {
        &self.words
    }

    /// The character dictionary
    pub fn characters(&self) -> &ReadingDictionary {
        &self.characters
    }
}

/// Rewrite numbered readings (those containing a digit) as accented Pinyin
fn accent_readings(
    dictionary: &mut ReadingDictionary,
    converter: TranscriptionConverter<'_>,
    file: &str,
) -> std::result::Result<(), DataError> {
    dictionary.try_map_readings(|reading| {
        if !reading.bytes().any(|b| b.is_ascii_digit()) {
            return Ok(reading.to_string());
        }
        converter
            .convert(reading, Notation::NumberedPinyin, Notation::AccentedPinyin)
            .map_err(|source| DataError::InvalidReading {
                file: file.to_string(),
                reading: reading.to_string(),
                source,
            })
    })
}
