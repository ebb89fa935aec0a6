//! Cleaning stages: markup, emoji and whitespace.
use lazy_static::lazy_static;
use regex::Regex;

use super::Transform;

lazy_static! {
    static ref LINKS: Regex = Regex::new(r"http\S+").unwrap();
    static ref MENTIONS: Regex = Regex::new(r"@\S+").unwrap();
    static ref HASHTAGS: Regex = Regex::new(r"#\S+").unwrap();
    static ref TAGS: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref ALPHA_NUM: Regex = Regex::new(r"([a-z]+)([0-9])").unwrap();
    static ref NUM_ALPHA: Regex = Regex::new(r"([0-9]+)([a-z])").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref DIGITS: Regex = Regex::new(r"[0-9]+").unwrap();
    static ref PUNCTUATION: Regex =
        Regex::new(r##"[!"#$%&'()*+,\-./:;<=>?@\[\\\]^_`{|}~]+"##).unwrap();
}

/// Removes links, at-mentions, hashtags and markup tags.
#[derive(Default)]
pub struct StripMarkup;

impl Transform for StripMarkup {
    fn transform(&self, text: &str) -> String {
        let text = LINKS.replace_all(text, "");
        let text = MENTIONS.replace_all(&text, "");
        let text = HASHTAGS.replace_all(&text, "");
        TAGS.replace_all(&text, "").into_owned()
    }
}

/// Removes emoji, pictographs, regional indicators and their joiners/selectors.
#[derive(Default)]
pub struct StripEmoji;

impl StripEmoji {
    #[inline]
    pub fn is_emoji(c: char) -> bool {
        matches!(c as u32,
            0x1F600..=0x1F64F // emoticons
            | 0x1F300..=0x1F5FF // symbols & pictographs
            | 0x1F680..=0x1F6FF // transport & map
            | 0x1F1E0..=0x1F1FF // flags
            | 0x1F900..=0x1F9FF // supplemental symbols & pictographs
            | 0x1FA70..=0x1FAFF // symbols & pictographs extended-A
            | 0x2600..=0x26FF // misc symbols
            | 0x2700..=0x27BF // dingbats
            | 0xFE0F // variation selector-16
            | 0x200D // zero width joiner
        )
    }
}

impl Transform for StripEmoji {
    fn transform(&self, text: &str) -> String {
        text.chars().filter(|c| !Self::is_emoji(*c)).collect()
    }
}

/// Splits letter/digit runs, collapses whitespace runs into one space and trims.
#[derive(Default)]
pub struct NormalizeWhitespace;

impl Transform for NormalizeWhitespace {
    fn transform(&self, text: &str) -> String {
        let text = ALPHA_NUM.replace_all(text, "$1 $2");
        let text = NUM_ALPHA.replace_all(&text, "$1 $2");
        WHITESPACE.replace_all(&text, " ").trim().to_string()
    }
}

/// Letters-only view of a line: digits are removed and punctuation runs become a single space.
pub fn character_only(text: &str) -> String {
    let text = DIGITS.replace_all(text, "");
    PUNCTUATION.replace_all(&text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_markup() {
        let s = "read <b>this</b> at https://example.com/x?y=1 with @someone #news now";
        assert_eq!(StripMarkup.transform(s), "read this at  with   now");
    }

    #[test]
    fn strip_emoji() {
        let s = "bonne journée 😀🇫🇷 à tous ☀️";
        assert_eq!(StripEmoji.transform(s), "bonne journée  à tous ");
    }

    #[test]
    fn strip_emoji_keeps_cjk() {
        let s = "今日は良い天気ですね";
        assert_eq!(StripEmoji.transform(s), s);
    }

    #[test]
    fn normalize() {
        let s = "  page12 has  \t 3apples\u{a0}today ";
        assert_eq!(NormalizeWhitespace.transform(s), "page 12 has 3 apples today");
    }

    #[test]
    fn characters() {
        assert_eq!(character_only("12.5% of 2020-2021"), "  of  ");
        assert_eq!(character_only("hello, world"), "hello  world");
    }
}
