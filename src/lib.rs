//! # hanmap: Mandarin Transcription Engine
//!
//! Converts between Hanzi and the three phonetic transcription systems of
//! Mandarin, and identifies which system a string is written in.
//!
//! ## Transcription Systems
//!
//! 1. **Pinyin** - accented (`mā`) or numbered (`ma1`)
//! 2. **Zhuyin** - Bopomofo letters with tone marks (`ㄇㄚ`, `ㄏㄨㄢ˙`)
//! 3. **IPA** - phonetic letters with Chao tone contours (`ma˥`)
//!
//! ## Example Usage
//!
//! ```
//! use hanmap::{HanMapper, Notation, SegmentOptions, Transcription};
//!
//! let mapper = HanMapper::new()?;
//!
//! // One syllable
//! assert_eq!(
//!     mapper.convert_syllable("ma1", Notation::NumberedPinyin, Notation::AccentedPinyin)?,
//!     "mā"
//! );
//!
//! // Whole strings, source system identified automatically
//! assert_eq!(mapper.to_zhuyin("xi1'an1")?, "ㄒㄧ ㄢ");
//! assert_eq!(mapper.identify_transcription("ㄝ ㄦ ㄒㄧㄣ"), Transcription::Zhuyin);
//!
//! // Hanzi
//! let options = SegmentOptions::default();
//! assert_eq!(mapper.hanzi_to_pinyin("愛喜歡愛。", &options)?, "àixǐhuan'ài。");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **Syllable Codec** - Parses and renders single syllables in every notation
//! - **Grammars** - Tokenize free text into literal and syllable spans
//! - **Converter** - Folds the token stream into converted text
//! - **Identifier** - Whole-string Pinyin/Zhuyin/IPA checks
//! - **Segmenter** - Assigns dictionary readings to Hanzi runs
//! - **HanMapper API** - Owns the tables and ties the components together

pub mod codec;
pub mod convert;
pub mod data;
pub mod dictionary;
pub mod identify;
pub mod mapper;
pub mod pattern;
pub mod segment;
pub mod table;
pub mod tone;
pub mod types;

// Re-export main types and functions for convenience
pub use codec::SyllableCodec;
pub use convert::{ConvertOptions, TranscriptionConverter};
pub use data::{DataInfo, DataLoader, DataSet};
pub use dictionary::ReadingDictionary;
pub use identify::{is_pinyin_compatible, is_zhuyin_compatible, TranscriptionIdentifier};
pub use mapper::HanMapper;
pub use pattern::{Grammar, Token};
pub use segment::{Container, HanziSegmenter, SegmentOptions};
pub use table::CorrespondenceTable;
pub use types::{
    DataError, Notation, Reading, Syllable, Tone, Transcription, TranscriptionError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
