// hanmap Syllable Grammars
// Per-system syllable patterns and a lazy literal/syllable tokenizer

use crate::table::CorrespondenceTable;
use crate::tone::{self, IPA_CONTOUR_LETTERS, IPA_LETTERS, MIDDLE_DOT, ZHUYIN_MARKS};
use crate::types::Notation;
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Compiled Zhuyin syllable pattern
static ZHUYIN_SYLLABLE: OnceLock<Regex> = OnceLock::new();

/// Compiled IPA syllable pattern
static IPA_SYLLABLE: OnceLock<Regex> = OnceLock::new();

/// Zhuyin initials (ㄅ through ㄙ)
const ZHUYIN_INITIALS: &str = "ㄅ-ㄙ";

/// Zhuyin medials (ㄧ, ㄨ, ㄩ)
const ZHUYIN_MEDIALS: &str = "ㄧ-ㄩ";

/// Zhuyin finals (ㄚ through ㄦ)
const ZHUYIN_FINALS: &str = "ㄚ-ㄦ";

/// Regex source for one Zhuyin syllable
///
/// At most one initial, medial and final, in that order, then an optional
/// tone mark. An unmarked first-tone syllable therefore ends where the next
/// initial begins (`ㄊㄧㄢㄒㄧㄚˋ` is `ㄊㄧㄢ` + `ㄒㄧㄚˋ`).
///
/// # Examples
/// ```
/// # use hanmap::pattern::zhuyin_pattern;
/// assert_eq!(
///     zhuyin_pattern(),
///     "(?:[ㄅ-ㄙ][ㄧ-ㄩ]?[ㄚ-ㄦ]?|[ㄧ-ㄩ][ㄚ-ㄦ]?|[ㄚ-ㄦ])[ˊˇˋ˙]?"
/// );
/// ```
pub fn zhuyin_pattern() -> String {
    format!(
        "(?:[{i}][{m}]?[{f}]?|[{m}][{f}]?|[{f}])[{marks}]?",
        i = ZHUYIN_INITIALS,
        m = ZHUYIN_MEDIALS,
        f = ZHUYIN_FINALS,
        marks = ZHUYIN_MARKS
    )
}

/// Regex source for one IPA syllable: letters plus an optional contour
pub fn ipa_pattern() -> String {
    format!("[{}]+[{}]*", IPA_LETTERS, IPA_CONTOUR_LETTERS)
}

fn zhuyin_regex() -> &'static Regex {
    ZHUYIN_SYLLABLE
        .get_or_init(|| Regex::new(&zhuyin_pattern()).expect("Invalid Zhuyin syllable pattern"))
}

fn ipa_regex() -> &'static Regex {
    IPA_SYLLABLE.get_or_init(|| Regex::new(&ipa_pattern()).expect("Invalid IPA syllable pattern"))
}

/// A span of input: either text to copy through or one syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'t> {
    Literal(&'t str),
    Syllable(&'t str),
}

/// Syllable grammar of one transcription system
///
/// Pinyin is matched against the table's syllable inventory with one
/// character of look-ahead (`fangan` splits as `fan gan`). Zhuyin is a
/// structured initial/medial/final regex and IPA a plain one.
#[derive(Clone, Copy)]
pub enum Grammar<'a> {
    Pinyin(&'a CorrespondenceTable),
    Zhuyin,
    Ipa,
}

impl<'a> Grammar<'a> {
    /// Grammar matching syllables written in `notation`
    ///
    /// Both Pinyin notations share one grammar, which accepts numbered and
    /// accented syllables alike.
    pub fn for_notation(notation: Notation, table: &'a CorrespondenceTable) -> Self {
        match notation {
            Notation::NumberedPinyin | Notation::AccentedPinyin => Grammar::Pinyin(table),
            Notation::Zhuyin => Grammar::Zhuyin,
            Notation::Ipa => Grammar::Ipa,
        }
    }

    /// Leftmost syllable in `haystack`, as a byte range
    ///
    /// `after_syllable` tells whether a syllable ends right where `haystack`
    /// begins; only then may the erhua `r` match at offset 0.
    pub fn find(&self, haystack: &str, after_syllable: bool) -> Option<Range<usize>> {
        match self {
            Grammar::Pinyin(table) => haystack.char_indices().find_map(|(start, _)| {
                match_pinyin_at(table, &haystack[start..], after_syllable && start == 0)
                    .map(|len| start..start + len)
            }),
            Grammar::Zhuyin => zhuyin_regex().find(haystack).map(|m| m.range()),
            Grammar::Ipa => ipa_regex().find(haystack).map(|m| m.range()),
        }
    }

    /// Lazily split `text` into literal and syllable tokens
    pub fn tokenize<'t>(&self, text: &'t str) -> Tokens<'a, 't> {
        Tokens {
            grammar: *self,
            rest: text,
            pending: None,
            after_syllable: false,
        }
    }
}

/// Byte length of the Pinyin syllable starting `text`, if any
///
/// Takes the longest run of Pinyin letters (after an optional middle dot)
/// that spells a table syllable with at most one tone mark. A syllable
/// ending in `n`, `ng` or `r` must not be followed by a vowel. An unmarked
/// syllable may carry a tone digit 0-5.
fn match_pinyin_at(table: &CorrespondenceTable, text: &str, suffix_allowed: bool) -> Option<usize> {
    let (dot_len, body) = match text.strip_prefix(MIDDLE_DOT) {
        Some(rest) => (MIDDLE_DOT.len_utf8(), rest),
        None => (0, text),
    };

    let ends: Vec<usize> = body
        .char_indices()
        .take_while(|(_, c)| tone::is_pinyin_letter(*c))
        .take(table.max_pinyin_len())
        .map(|(i, c)| i + c.len_utf8())
        .collect();

    for &end in ends.iter().rev() {
        let candidate = &body[..end];
        let Some((key, marks)) = strip_tone_marks(candidate) else {
            continue;
        };
        if dot_len > 0 && marks > 0 {
            continue;
        }
        if key == "r" && (!suffix_allowed || dot_len > 0) {
            continue;
        }
        if !table.has_pinyin(&key) {
            continue;
        }

        let next = body[end..].chars().next();
        let open_final = key.ends_with('n') || key.ends_with("ng") || key.ends_with('r');
        if open_final && next.is_some_and(tone::is_pinyin_vowel) {
            continue;
        }

        let digit_len = match next {
            Some('0'..='5') if marks == 0 && dot_len == 0 => 1,
            _ => 0,
        };
        return Some(dot_len + end + digit_len);
    }

    None
}

/// Lowercase, tone-free lookup key and the number of tone marks removed
///
/// Returns `None` when the candidate carries more than one tone mark.
fn strip_tone_marks(candidate: &str) -> Option<(String, usize)> {
    let mut key = String::with_capacity(candidate.len());
    let mut marks = 0;

    for ch in candidate.chars() {
        let plain = match tone::decode_accented(ch) {
            Some((plain, _)) => {
                marks += 1;
                plain
            }
            None => ch,
        };
        key.push(match tone::to_lower(plain) {
            'v' => 'ü',
            lower => lower,
        });
    }

    (marks <= 1).then_some((key, marks))
}

/// Iterator over the tokens of a text
///
/// Literal and syllable tokens alternate as found; adjacent syllables come
/// out as consecutive `Syllable` tokens with no literal between them.
pub struct Tokens<'a, 't> {
    grammar: Grammar<'a>,
    rest: &'t str,
    pending: Option<&'t str>,
    after_syllable: bool,
}

impl<'a, 't> Iterator for Tokens<'a, 't> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Token<'t>> {
        if let Some(syllable) = self.pending.take() {
            self.after_syllable = true;
            return Some(Token::Syllable(syllable));
        }

        if self.rest.is_empty() {
            return None;
        }

        match self.grammar.find(self.rest, self.after_syllable) {
            None => {
                let literal = self.rest;
                self.rest = "";
                self.after_syllable = false;
                Some(Token::Literal(literal))
            }
            Some(range) => {
                let literal = &self.rest[..range.start];
                let syllable = &self.rest[range.clone()];
                self.rest = &self.rest[range.end..];

                if literal.is_empty() {
                    self.after_syllable = true;
                    Some(Token::Syllable(syllable))
                } else {
                    self.pending = Some(syllable);
                    self.after_syllable = false;
                    Some(Token::Literal(literal))
                }
            }
        }
    }
}
