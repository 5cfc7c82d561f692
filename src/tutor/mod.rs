//! The built-in French tutor: everything that answers without a hosted
//! model.

pub mod arithmetic;
pub mod conjugation;
mod lessons;
pub mod rules;

pub use rules::{classify, respond, Reply, Topic};

pub(crate) const OPENING: &str = "Excellente question ! ✨";
pub(crate) const CLOSING: &str = "Continue comme ça ! 💪";

/// Whole-word containment: the keyword must not touch a letter or digit on
/// either side, so "ou" does not fire inside "bonjour".
pub(crate) fn contains_keyword(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    text.match_indices(keyword).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + keyword.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

pub(crate) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| contains_keyword(text, k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_match_whole_words_only() {
        assert!(contains_keyword("comment saluer les gens", "saluer"));
        assert!(contains_keyword("l'alphabet français", "alphabet"));
        assert!(contains_keyword("enseigne-moi", "enseigne"));
        assert!(!contains_keyword("bonjour", "ou"));
        assert!(!contains_keyword("j'aime", "j'ai"));
        assert!(!contains_keyword("anything", ""));
    }

    #[test]
    fn multi_word_keywords_match_as_phrases() {
        assert!(contains_any("je veux le passé composé", &["passé composé"]));
        assert!(!contains_any("passé très composé", &["passé composé"]));
    }
}
