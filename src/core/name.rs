use crate::core::charset::Charset;

/// True when the name is non-empty and every character is in the strict allowlist.
pub fn is_latin(name: &str) -> bool {
    !name.is_empty() && Charset::Strict.contains_all(name)
}

/// Replaces every character outside the allowlist with `?`, then trims.
pub fn replace_non_latin(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if Charset::StrictNoQuestionMark.contains(c) {
                c
            } else {
                '?'
            }
        })
        .collect();
    replaced.trim().to_string()
}

/// An empty string counts as all question marks.
pub fn all_question_marks(name: &str) -> bool {
    name.chars().all(|c| c == '?')
}

/// Drops characters outside the allowlist and capitalizes each word.
pub fn clean(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| Charset::Strict.contains(*c))
        .collect();

    kept.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Needs at least a given name and a surname.
pub fn is_structurally_valid(name: &str) -> bool {
    name.split_whitespace().count() >= 2
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
