// hanmap Reading Dictionary
// Hanzi string → ordered Pinyin readings, most common first

use crate::types::DataError;
use log::warn;
use rustc_hash::FxHashMap;

/// Separator between readings in a dictionary row and in all-readings output
pub const READING_SEPARATOR: char = '/';

/// Immutable map from Hanzi (word or single character) to its readings
///
/// Every entry has at least one reading.
#[derive(Debug, Clone, Default)]
pub struct ReadingDictionary {
    entries: FxHashMap<String, Vec<String>>,
}

impl ReadingDictionary {
    /// Parse `HANZI<TAB>READING1/READING2/...` rows
    ///
    /// `file` names the source in error messages. A repeated Hanzi key
    /// replaces the earlier row.
    pub fn from_tsv(file: &str, source: &str) -> Result<Self, DataError> {
        let mut entries: FxHashMap<String, Vec<String>> = FxHashMap::default();

        for (idx, line) in source.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let malformed = |reason: &str| DataError::Malformed {
                file: file.to_string(),
                line: idx + 1,
                reason: reason.to_string(),
            };

            let (hanzi, readings) = line
                .split_once('\t')
                .ok_or_else(|| malformed("expected HANZI<TAB>READINGS"))?;
            if hanzi.is_empty() {
                return Err(malformed("empty Hanzi field"));
            }

            let readings: Vec<String> = readings
                .split(READING_SEPARATOR)
                .map(|r| r.trim().to_string())
                .collect();
            if readings.iter().any(String::is_empty) {
                return Err(malformed("empty reading"));
            }

            if entries.insert(hanzi.to_string(), readings).is_some() {
                warn!("{}: duplicate entry for '{}' at line {}", file, hanzi, idx + 1);
            }
        }

        if entries.is_empty() {
            return Err(DataError::Empty {
                file: file.to_string(),
            });
        }

        Ok(Self { entries })
    }

    /// Readings for a Hanzi string
    #[inline]
    pub fn get(&self, hanzi: &str) -> Option<&[String]> {
        self.entries.get(hanzi).map(Vec::as_slice)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrite every reading in place, stopping at the first error
    pub(crate) fn try_map_readings<E>(
        &mut self,
        mut f: impl FnMut(&str) -> Result<String, E>,
    ) -> Result<(), E> {
        for readings in self.entries.values_mut() {
            for reading in readings.iter_mut() {
                *reading = f(reading)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataLoader, CHARACTERS_FILE};

    #[test]
    fn test_embedded_characters() {
        let dict =
            ReadingDictionary::from_tsv(CHARACTERS_FILE, DataLoader::characters_data()).unwrap();
        assert!(!dict.is_empty());

        let readings = dict.get("喜").unwrap();
        assert_eq!(readings, ["xǐ", "xī", "chì"]);
    }

    #[test]
    fn test_row_parsing() {
        let dict = ReadingDictionary::from_tsv("test", "便宜\tpiànyi/biànyí\n\n手\tshǒu\n").unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("便宜").unwrap(), ["piànyi", "biànyí"]);
        assert_eq!(dict.get("手").unwrap(), ["shǒu"]);
        assert!(dict.get("收").is_none());
    }

    #[test]
    fn test_duplicate_replaces() {
        let dict = ReadingDictionary::from_tsv("test", "手\tshou3\n手\tshǒu\n").unwrap();
        assert_eq!(dict.get("手").unwrap(), ["shǒu"]);
    }

    #[test]
    fn test_missing_tab() {
        let result = ReadingDictionary::from_tsv("test", "手 shǒu\n");
        assert!(matches!(result, Err(DataError::Malformed { line: 1, .. })));
    }

    #[test]
    fn test_empty_reading() {
        let result = ReadingDictionary::from_tsv("test", "手\tshǒu//\n");
        assert!(matches!(result, Err(DataError::Malformed { .. })));
    }

    #[test]
    fn test_empty_source() {
        let result = ReadingDictionary::from_tsv("test", "");
        assert!(matches!(result, Err(DataError::Empty { .. })));
    }
}
