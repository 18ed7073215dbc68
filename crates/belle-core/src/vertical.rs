//! Set of characters that take their vertical-form position in tate mode.

use std::collections::BTreeSet;
use std::path::Path;

use crate::constants::VERTICAL_FORMS_DATA;
use crate::error::{GlyphError, GlyphResult};

/// Immutable set of code points repositioned in vertical writing.
///
/// The default set is parsed from the bundled data file. Custom sets use the
/// same line format: a `U+XXXX` code point (or the literal character) as the
/// first token, anything after it ignored, `#` starting a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerticalForms {
    chars: BTreeSet<char>,
}

impl Default for VerticalForms {
    fn default() -> Self {
        // Bundled data is checked by test_bundled_data_parses
        Self::parse(VERTICAL_FORMS_DATA).unwrap_or_else(|_| Self::empty())
    }
}

impl VerticalForms {
    pub fn empty() -> Self {
        Self {
            chars: BTreeSet::new(),
        }
    }

    pub fn parse(data: &str) -> GlyphResult<Self> {
        let mut chars = BTreeSet::new();

        for (index, raw) in data.lines().enumerate() {
            let line = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            };
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            let ch = parse_entry(token).ok_or_else(|| GlyphError::InvalidVerticalForms {
                line: index + 1,
                content: raw.to_string(),
            })?;
            chars.insert(ch);
        }

        Ok(Self { chars })
    }

    pub fn from_file(path: impl AsRef<Path>) -> GlyphResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::parse(&data)
    }

    /// A copy of this set with extra characters added.
    pub fn with_extra(&self, extra: impl IntoIterator<Item = char>) -> Self {
        let mut chars = self.chars.clone();
        chars.extend(extra);
        Self { chars }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

fn parse_entry(token: &str) -> Option<char> {
    if let Some(hex) = token
        .strip_prefix("U+")
        .or_else(|| token.strip_prefix("u+"))
    {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }

    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KANA_AND_PUNCTUATION: &str = "ぁぃぅぇぉゃゅょっァィゥェォャュョッ、。「」…‥・ー−—〜";

    #[test]
    fn test_default_set_contents() {
        let forms = VerticalForms::default();
        assert_eq!(forms.len(), KANA_AND_PUNCTUATION.chars().count());
        for ch in KANA_AND_PUNCTUATION.chars() {
            assert!(forms.contains(ch), "missing {:?}", ch);
        }
    }

    #[test]
    fn test_bundled_data_parses() {
        assert!(VerticalForms::parse(VERTICAL_FORMS_DATA).is_ok());
    }

    #[test]
    fn test_ordinary_characters_excluded() {
        let forms = VerticalForms::default();
        assert!(!forms.contains('あ'));
        assert!(!forms.contains('A'));
        // Full-width hyphen-minus is not the minus sign
        assert!(!forms.contains('－'));
    }

    #[test]
    fn test_parse_literal_and_comments() {
        let forms = VerticalForms::parse("# header\n\n﹁ literal\nU+FE10 presentation comma # trailing\n").unwrap();
        assert_eq!(forms.len(), 2);
        assert!(forms.contains('﹁'));
        assert!(forms.contains('\u{FE10}'));
    }

    #[test]
    fn test_parse_reports_line() {
        match VerticalForms::parse("U+3041\nU+ZZZZ\n") {
            Err(GlyphError::InvalidVerticalForms { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(VerticalForms::parse("ab").is_err());
        // Surrogates are not scalar values
        assert!(VerticalForms::parse("U+D800").is_err());
    }

    #[test]
    fn test_with_extra_leaves_original() {
        let base = VerticalForms::default();
        let extended = base.with_extra(['（', '）']);
        assert_eq!(extended.len(), base.len() + 2);
        assert!(!base.contains('（'));
    }
}
