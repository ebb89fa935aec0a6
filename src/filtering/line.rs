//! Line-level detection stages and the full [LineFilter] chain.
use super::clean::{self, NormalizeWhitespace, StripEmoji, StripMarkup};
use super::script::has_cjk;
use super::{Filter, Transform};

/// Navigation/boilerplate characters that disqualify a line.
pub const ILLEGAL_CHARS: &[char] = &[
    '|', '©', '«', '®', '»', '˂', '˃', '˄', '˅', '/', '\\', '{', '}',
];

/// Per-character caps: a line holding `cap` or more of `char` is rejected.
pub const CHAR_CAPS: &[(char, usize)] = &[
    ('-', 4),
    ('(', 4),
    (')', 4),
    ('=', 2),
    ('_', 2),
    ('.', 15),
    ('&', 4),
    ('[', 3),
    (']', 3),
    ('*', 5),
];

/// Simple length filter.
/// Returns `false` if provided line is not strictly longer than [Length::min_size] unicode codepoints.
pub struct Length {
    min_size: usize,
}

impl Length {
    /// specify a minimum length
    pub fn with_min_size(min_size: usize) -> Self {
        Self { min_size }
    }

    /// Get a reference to the length's min size.
    pub fn min_size(&self) -> &usize {
        &self.min_size
    }
}

impl Filter<&str> for Length {
    fn detect(&self, line: &str) -> bool {
        line.chars().count() > self.min_size
    }
}

impl Default for Length {
    /// Default minimum length is 15 Unicode Codepoints
    fn default() -> Self {
        Length { min_size: 15 }
    }
}

/// Rejects lines containing any of the configured characters.
pub struct IllegalChars {
    chars: Vec<char>,
}

impl IllegalChars {
    pub fn new(chars: Vec<char>) -> Self {
        Self { chars }
    }
}

impl Filter<&str> for IllegalChars {
    fn detect(&self, line: &str) -> bool {
        !line.chars().any(|c| self.chars.contains(&c))
    }
}

impl Default for IllegalChars {
    fn default() -> Self {
        Self::new(ILLEGAL_CHARS.to_vec())
    }
}

/// Rejects mostly numeric/symbolic lines: the line is kept if its
/// [clean::character_only] view is strictly longer than `min_size`.
pub struct CharacterOnly {
    length: Length,
}

impl Filter<&str> for CharacterOnly {
    fn detect(&self, line: &str) -> bool {
        self.length.detect(clean::character_only(line).as_str())
    }
}

impl Default for CharacterOnly {
    fn default() -> Self {
        Self {
            length: Length::with_min_size(12),
        }
    }
}

/// Script-aware minimum length (inclusive).
///
/// CJK lines carry more information per code point and get a lower threshold.
pub struct ScriptLength {
    cjk: usize,
    other: usize,
}

impl ScriptLength {
    pub fn new(cjk: usize, other: usize) -> Self {
        Self { cjk, other }
    }

    /// minimum length a line must reach to be kept.
    pub fn threshold(&self, line: &str) -> usize {
        if has_cjk(line) {
            self.cjk
        } else {
            self.other
        }
    }
}

impl Filter<&str> for ScriptLength {
    fn detect(&self, line: &str) -> bool {
        line.chars().count() >= self.threshold(line)
    }
}

impl Default for ScriptLength {
    fn default() -> Self {
        Self::new(15, 50)
    }
}

/// Rejects tables, menus and code snippets by counting characters.
pub struct CharCaps {
    caps: Vec<(char, usize)>,
}

impl CharCaps {
    pub fn new(caps: Vec<(char, usize)>) -> Self {
        Self { caps }
    }
}

impl Filter<&str> for CharCaps {
    fn detect(&self, line: &str) -> bool {
        let mut counts = vec![0usize; self.caps.len()];
        for c in line.chars() {
            if let Some(idx) = self.caps.iter().position(|(cap_char, _)| *cap_char == c) {
                counts[idx] += 1;
                if counts[idx] >= self.caps[idx].1 {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for CharCaps {
    fn default() -> Self {
        Self::new(CHAR_CAPS.to_vec())
    }
}

/// Ordered, short-circuiting line filter.
///
/// [LineFilter::filter] returns the cleaned line if it passes every stage.
/// The chain is pure: the same raw input always gives the same output.
#[derive(Default)]
pub struct LineFilter {
    markup: StripMarkup,
    emoji: StripEmoji,
    whitespace: NormalizeWhitespace,
    length: Length,
    illegal: IllegalChars,
    character_only: CharacterOnly,
    script_length: ScriptLength,
    caps: CharCaps,
}

impl LineFilter {
    /// Build a chain with a custom illegal character set.
    pub fn with_illegal_chars(chars: Vec<char>) -> Self {
        Self {
            illegal: IllegalChars::new(chars),
            ..Default::default()
        }
    }

    /// Cheap check done before any cleaning.
    #[inline]
    pub fn pre_filter(&self, raw: &str) -> bool {
        self.length.detect(raw)
    }

    /// Clean `raw` and return it if it is accepted.
    pub fn filter(&self, raw: &str) -> Option<String> {
        let line = self.markup.transform(raw);
        let line = self.emoji.transform(&line);
        let line = self.whitespace.transform(&line);
        let text = line.as_str();

        if !(self.length.detect(text) && self.illegal.detect(text)) {
            return None;
        }
        if !self.character_only.detect(text) {
            return None;
        }
        if !self.script_length.detect(text) {
            return None;
        }
        if !self.caps.detect(text) {
            return None;
        }

        Some(line)
    }
}
