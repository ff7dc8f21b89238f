//! Character allowlists shared by the name checks.
//!
//! `Strict` backs `is_latin`, `replace_non_latin` and `clean`. `Broad` backs
//! the entity check: more diacritics, but no apostrophe, hyphen or `?`.

/// Latin-extended letters accepted by the strict policy (Turkish, German,
/// French, Spanish and friends).
const STRICT_EXTRA_LETTERS: &str =
    "çÇğĞıİöÖşŞüÜéÉèÈêÊáÁàÀâÂíÍìÌîÎóÓòÒôÔúÚùÙûÛÿŸýÝžŽñÑß";

const BROAD_EXTRA_LETTERS: &str =
    "äöüßÄÖÜáàâãåçéèêëíìîïñóòôõøúùûýÿÁÀÂÃÅÇÉÈÊËÍÌÎÏÑÓÒÔÕØÚÙÛÝ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Letters, any whitespace, `'`, `-` and `?`.
    Strict,
    /// Strict minus `?`; what survives non-Latin replacement untouched.
    StrictNoQuestionMark,
    /// ASCII letters, ASCII whitespace and the broad diacritic set.
    Broad,
}

impl Charset {
    pub fn contains(self, c: char) -> bool {
        match self {
            Charset::Strict => c == '?' || is_strict_base(c),
            Charset::StrictNoQuestionMark => is_strict_base(c),
            Charset::Broad => {
                c.is_ascii_alphabetic()
                    || is_ascii_whitespace(c)
                    || BROAD_EXTRA_LETTERS.contains(c)
            }
        }
    }

    pub fn contains_all(self, text: &str) -> bool {
        text.chars().all(|c| self.contains(c))
    }
}

fn is_strict_base(c: char) -> bool {
    c.is_ascii_alphabetic()
        || c.is_whitespace()
        || c == '\''
        || c == '-'
        || STRICT_EXTRA_LETTERS.contains(c)
}

// space, \t, \n, \r, vertical tab, form feed
fn is_ascii_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{0b}' | '\u{0c}')
}
