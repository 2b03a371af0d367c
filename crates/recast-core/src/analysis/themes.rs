//! Main theme, sub-theme and value-proposition extraction.

use std::collections::HashSet;

use super::reports::MainThemes;
use crate::text;
use crate::word_lists::VALUE_WORDS;

const MAIN_THEME_CHARS: usize = 100;
const SUB_THEME_CHARS: (usize, usize) = (3, 60);
const MAX_SUB_THEMES: usize = 5;
const MAX_VALUE_PROPS: usize = 5;

/// Extract the main theme, sub-themes and value propositions.
///
/// Sub-themes are short lines without sentence punctuation, usually
/// headings; a leading markdown `#` is dropped.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn extract_main_themes(text: &str) -> MainThemes {
    let sentences = text::split_sentences_keep_terminators(text);

    let main_theme = sentences
        .first()
        .map(|s| text::truncate(s, MAIN_THEME_CHARS))
        .unwrap_or_default();

    MainThemes {
        main_theme,
        sub_themes: sub_themes(text),
        value_props: value_props(&sentences),
    }
}

fn sub_themes(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.lines()
        .map(|line| line.trim().trim_start_matches('#').trim())
        .filter(|line| {
            let len = line.chars().count();
            (SUB_THEME_CHARS.0..=SUB_THEME_CHARS.1).contains(&len)
                && !line.ends_with(['.', '!', '?', ',', ':', ';'])
        })
        .filter(|line| seen.insert(line.to_lowercase()))
        .take(MAX_SUB_THEMES)
        .map(str::to_string)
        .collect()
}

fn value_props(sentences: &[String]) -> Vec<String> {
    sentences
        .iter()
        .filter(|s| {
            text::extract_words(s)
                .iter()
                .any(|w| VALUE_WORDS.contains(&w.as_str()))
        })
        .take(MAX_VALUE_PROPS)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_theme_is_first_sentence() {
        let themes = extract_main_themes("Remote work is here to stay. Offices are changing.");
        assert_eq!(themes.main_theme, "Remote work is here to stay.");
    }

    #[test]
    fn main_theme_is_truncated() {
        let first = format!("{} end.", "word ".repeat(40));
        let themes = extract_main_themes(&first);
        assert!(themes.main_theme.ends_with("..."));
        assert!(themes.main_theme.chars().count() <= MAIN_THEME_CHARS + 3);
    }

    #[test]
    fn headings_become_sub_themes() {
        let text = "# Why focus matters\n\nDeep work pays off.\n\n## Getting started\n\nBlock your calendar.\n\n## Getting Started\n";
        let themes = extract_main_themes(text);
        assert_eq!(themes.sub_themes, vec!["Why focus matters", "Getting started"]);
    }

    #[test]
    fn value_props_use_benefit_vocabulary() {
        let text = "Batching email will save you an hour. The sky is blue. Teams meet on Mondays.";
        let themes = extract_main_themes(text);
        assert_eq!(themes.value_props, vec!["Batching email will save you an hour."]);
    }

    #[test]
    fn empty_text_has_empty_themes() {
        assert_eq!(extract_main_themes(""), MainThemes::default());
    }
}
