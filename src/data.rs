// hanmap Data Loader
// Embedded default tables and loading of replacement tables from disk

use crate::types::DataError;
use log::debug;
use std::borrow::Cow;
use std::path::Path;

/// File name of the Pinyin/Zhuyin/IPA correspondence table
pub const TRANSCRIPTIONS_FILE: &str = "transcriptions.csv";

/// File name of the word reading dictionary
pub const WORDS_FILE: &str = "hanzi_pinyin_words.tsv";

/// File name of the character reading dictionary
pub const CHARACTERS_FILE: &str = "hanzi_pinyin_characters.tsv";

/// Embedded correspondence table (PINYIN,ZHUYIN,IPA rows)
pub const TRANSCRIPTIONS_DATA: &str = include_str!("../data/transcriptions.csv");

/// Embedded word dictionary (HANZI<TAB>READING/READING rows)
pub const WORDS_DATA: &str = include_str!("../data/hanzi_pinyin_words.tsv");

/// Embedded character dictionary (HANZI<TAB>READING/READING rows)
pub const CHARACTERS_DATA: &str = include_str!("../data/hanzi_pinyin_characters.tsv");

/// Data loader utility
pub struct DataLoader;

impl DataLoader {
    /// Get the embedded correspondence table
    pub fn transcriptions_data() -> &'static str {
        TRANSCRIPTIONS_DATA
    }

    /// Get the embedded word dictionary
    pub fn words_data() -> &'static str {
        WORDS_DATA
    }

    /// Get the embedded character dictionary
    pub fn characters_data() -> &'static str {
        CHARACTERS_DATA
    }

    /// Get info about the embedded data
    pub fn info() -> DataInfo {
        DataSet::embedded().info()
    }
}

/// The three source texts the tables are built from
#[derive(Debug, Clone)]
pub struct DataSet {
    pub transcriptions: Cow<'static, str>,
    pub words: Cow<'static, str>,
    pub characters: Cow<'static, str>,
}

impl DataSet {
    /// Data compiled into the crate
    pub fn embedded() -> Self {
        Self {
            transcriptions: Cow::Borrowed(DataLoader::transcriptions_data()),
            words: Cow::Borrowed(DataLoader::words_data()),
            characters: Cow::Borrowed(DataLoader::characters_data()),
        }
    }

    /// Read all three files from a directory
    ///
    /// Every file must exist; a missing file is an error, never a fallback
    /// to the embedded copy.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, DataError> {
        let dir = dir.as_ref();
        Ok(Self {
            transcriptions: Cow::Owned(read_file(&dir.join(TRANSCRIPTIONS_FILE))?),
            words: Cow::Owned(read_file(&dir.join(WORDS_FILE))?),
            characters: Cow::Owned(read_file(&dir.join(CHARACTERS_FILE))?),
        })
    }

    /// Sizes of the source texts
    pub fn info(&self) -> DataInfo {
        DataInfo {
            transcriptions_size: self.transcriptions.len(),
            words_size: self.words.len(),
            characters_size: self.characters.len(),
            total_size: self.transcriptions.len() + self.words.len() + self.characters.len(),
        }
    }
}

fn read_file(path: &Path) -> Result<String, DataError> {
    debug!("reading data file {}", path.display());
    std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Information about a data set
#[derive(Debug, Clone)]
pub struct DataInfo {
    /// Size of the correspondence table in bytes
    pub transcriptions_size: usize,
    /// Size of the word dictionary in bytes
    pub words_size: usize,
    /// Size of the character dictionary in bytes
    pub characters_size: usize,
    /// Total size of all data in bytes
    pub total_size: usize,
}
