//! Text processing utilities.
//!
//! Provides sentence splitting, word extraction, and paragraph splitting
//! for use by analysis modules. Splitting is deliberately simple: any run of
//! `.`, `!` or `?` ends a sentence.

/// Split text into sentences on runs of `.`, `!` and `?`.
///
/// Empty and whitespace-only fragments are dropped. Terminators are not kept.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(is_sentence_terminator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into sentences, keeping each sentence's terminating punctuation.
///
/// Used where sentences are quoted back to the reader (insights, key points).
pub fn split_sentences_keep_terminators(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);
        if is_sentence_terminator(ch) {
            while let Some(&next) = chars.peek() {
                if !is_sentence_terminator(next) {
                    break;
                }
                current.push(next);
                chars.next();
            }
            push_trimmed(&mut sentences, &current);
            current.clear();
        }
    }
    push_trimmed(&mut sentences, &current);

    sentences
}

/// Whitespace-separated tokens, exactly as written.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Extract words from text, splitting on whitespace and stripping punctuation.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-'))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Split text into paragraphs (separated by blank lines).
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Truncate to at most `max` characters, appending `...` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{}...", head.trim_end())
    }
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn push_trimmed(out: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if trimmed.chars().any(char::is_alphanumeric) {
        out.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences, vec!["This is a sentence", "This is another sentence"]);
    }

    #[test]
    fn runs_of_terminators_collapse() {
        let sentences = split_sentences("Wait... what?! Really.");
        assert_eq!(sentences, vec!["Wait", "what", "Really"]);
    }

    #[test]
    fn no_terminator_is_one_sentence() {
        assert_eq!(split_sentences("no punctuation here").len(), 1);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
        assert!(split_sentences("...!?").is_empty());
    }

    #[test]
    fn keep_terminators() {
        let sentences = split_sentences_keep_terminators("Save time. Do it now!! Why not");
        assert_eq!(sentences, vec!["Save time.", "Do it now!!", "Why not"]);
    }

    #[test]
    fn extract_words_basic() {
        let words = extract_words("Hello, world! This is a test.");
        assert_eq!(words, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn split_paragraphs_basic() {
        let text = "First paragraph.\n\nSecond paragraph.\r\n\r\nThird.";
        assert_eq!(split_paragraphs(text).len(), 3);
        assert!(split_paragraphs("").is_empty());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("héllo wörld", 5), "héllo...");
    }
}
