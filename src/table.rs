// hanmap Correspondence Table
// Pinyin <-> Zhuyin <-> IPA syllable bases, indexed from every side

use crate::types::DataError;
use rustc_hash::{FxHashMap, FxHashSet};

/// One row of the correspondence table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correspondence {
    pub pinyin: String,
    pub zhuyin: String,
    pub ipa: String,
}

/// Syllable base correspondence table
///
/// Keys are tone-free bases. Pinyin keys are lowercase and spell ü as `ü`.
/// When two rows share a Zhuyin or IPA base, the reverse index keeps the
/// first row.
#[derive(Debug, Clone)]
pub struct CorrespondenceTable {
    rows: Vec<Correspondence>,

    /// Pinyin base → row index
    by_pinyin: FxHashMap<String, usize>,

    /// Zhuyin base → row index
    by_zhuyin: FxHashMap<String, usize>,

    /// IPA base → row index
    by_ipa: FxHashMap<String, usize>,

    /// Pinyin bases, for the tokenizer
    pinyin_syllables: FxHashSet<String>,

    /// Longest Pinyin base in characters
    max_pinyin_len: usize,
}

impl CorrespondenceTable {
    /// Parse `PINYIN,ZHUYIN,IPA` rows
    ///
    /// Blank lines are skipped. A row without exactly three non-empty fields
    /// fails the whole load.
    pub fn from_csv(source: &str) -> Result<Self, DataError> {
        let mut rows = Vec::new();

        for (idx, line) in source.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            match fields.as_slice() {
                [pinyin, zhuyin, ipa]
                    if !pinyin.is_empty() && !zhuyin.is_empty() && !ipa.is_empty() =>
                {
                    rows.push(Correspondence {
                        pinyin: normalize_pinyin_key(pinyin),
                        zhuyin: zhuyin.to_string(),
                        ipa: ipa.to_string(),
                    });
                }
                _ => {
                    return Err(DataError::Malformed {
                        file: crate::data::TRANSCRIPTIONS_FILE.to_string(),
                        line: idx + 1,
                        reason: format!("expected PINYIN,ZHUYIN,IPA, got '{}'", line),
                    })
                }
            }
        }

        Self::from_rows(rows)
    }

    /// Build the indices over already-parsed rows
    pub fn from_rows(rows: Vec<Correspondence>) -> Result<Self, DataError> {
        if rows.is_empty() {
            return Err(DataError::Empty {
                file: crate::data::TRANSCRIPTIONS_FILE.to_string(),
            });
        }

        let mut by_pinyin = FxHashMap::default();
        let mut by_zhuyin = FxHashMap::default();
        let mut by_ipa = FxHashMap::default();
        let mut pinyin_syllables = FxHashSet::default();
        let mut max_pinyin_len = 0;

        for (idx, row) in rows.iter().enumerate() {
            by_pinyin.entry(row.pinyin.clone()).or_insert(idx);
            by_zhuyin.entry(row.zhuyin.clone()).or_insert(idx);
            by_ipa.entry(row.ipa.clone()).or_insert(idx);

            max_pinyin_len = max_pinyin_len.max(row.pinyin.chars().count());
            pinyin_syllables.insert(row.pinyin.clone());
        }

        Ok(Self {
            rows,
            by_pinyin,
            by_zhuyin,
            by_ipa,
            pinyin_syllables,
            max_pinyin_len,
        })
    }

    /// Zhuyin base for a Pinyin base (case-insensitive, `v` accepted for ü)
    pub fn zhuyin_for_pinyin(&self, pinyin: &str) -> Option<&str> {
        self.row_for_pinyin(pinyin).map(|row| row.zhuyin.as_str())
    }

    /// IPA base for a Pinyin base (case-insensitive, `v` accepted for ü)
    pub fn ipa_for_pinyin(&self, pinyin: &str) -> Option<&str> {
        self.row_for_pinyin(pinyin).map(|row| row.ipa.as_str())
    }

    /// Pinyin base for a Zhuyin base
    pub fn pinyin_for_zhuyin(&self, zhuyin: &str) -> Option<&str> {
        self.by_zhuyin
            .get(zhuyin)
            .map(|&idx| self.rows[idx].pinyin.as_str())
    }

    /// Pinyin base for an IPA base
    pub fn pinyin_for_ipa(&self, ipa: &str) -> Option<&str> {
        self.by_ipa.get(ipa).map(|&idx| self.rows[idx].pinyin.as_str())
    }

    /// True if the already-normalized key is a Pinyin syllable base
    #[inline]
    pub fn has_pinyin(&self, normalized: &str) -> bool {
        self.pinyin_syllables.contains(normalized)
    }

    /// True if the string is a Zhuyin syllable base
    #[inline]
    pub fn has_zhuyin(&self, zhuyin: &str) -> bool {
        self.by_zhuyin.contains_key(zhuyin)
    }

    /// Longest Pinyin base, in characters
    pub fn max_pinyin_len(&self) -> usize {
        self.max_pinyin_len
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no rows (never the case for a loaded table)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in file order
    pub fn rows(&self) -> &[Correspondence] {
        &self.rows
    }

    fn row_for_pinyin(&self, pinyin: &str) -> Option<&Correspondence> {
        self.by_pinyin
            .get(&normalize_pinyin_key(pinyin))
            .map(|&idx| &self.rows[idx])
    }
}

/// Lowercase a Pinyin base and spell ü as `ü`
pub fn normalize_pinyin_key(pinyin: &str) -> String {
    pinyin
        .chars()
        .map(|c| match crate::tone::to_lower(c) {
            'v' => 'ü',
            lower => lower,
        })
        .collect()
}
