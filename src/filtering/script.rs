//! Script detection used to pick the minimum line length.
use unicode_script::{Script, UnicodeScript};

/// Returns `true` if `c` belongs to the Han, Hangul, Hiragana or Katakana scripts.
#[inline]
pub fn is_cjk(c: char) -> bool {
    matches!(
        c.script(),
        Script::Han | Script::Hangul | Script::Hiragana | Script::Katakana
    )
}

/// Returns `true` if any code point of `line` is CJK (see [is_cjk]).
pub fn has_cjk(line: &str) -> bool {
    line.chars().any(is_cjk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_scripts() {
        assert!(has_cjk("这是中文"));
        assert!(has_cjk("한국어 문장"));
        assert!(has_cjk("ひらがな"));
        assert!(has_cjk("カタカナ"));
        assert!(has_cjk("mostly latin with one 字"));
    }

    #[test]
    fn latin_cyrillic_arabic() {
        assert!(!has_cjk("plain english sentence"));
        assert!(!has_cjk("русский текст"));
        assert!(!has_cjk("نص عربي"));
    }
}
