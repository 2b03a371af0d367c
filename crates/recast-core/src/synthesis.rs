//! Deterministic platform content, used when no generative backend is available.
//!
//! Renders a thread, carousel or reel script straight from the analysis,
//! detected topics and extracted key points. Output depends only on the
//! input text, so the same text always yields the same content.

use std::fmt::Write as _;

use crate::analysis::{self, ContentAnalysis};
use crate::platform::{ContentType, Platform, Tone};
use crate::text;
use crate::topics::{self, TopicReport};
use crate::word_lists::{
    ASPIRATION_WORDS, CASUAL_MARKERS, HUMOR_MARKERS, LEARNING_WORDS, RESEARCH_WORDS,
};

/// Returned for any format other than a supported platform.
pub const UNSUPPORTED_FORMAT: &str = "Content transformation not available for this format.";

const THREAD_EMOJIS: [&str; 4] = ["💡", "🎯", "⚡", "🔥"];
const SLIDE_EMOJIS: [&str; 3] = ["🎯", "⚡", "🏆"];

/// Exclamation marks per sentence above which text reads as casual.
const CASUAL_EXCLAMATION_RATIO: f64 = 0.3;

/// Words above which untyped text is treated as an article.
const ARTICLE_WORDS: usize = 800;

/// Fallback main theme for text without sentences.
const DEFAULT_THEME: &str = "Ideas worth sharing";

/// Everything the templates draw from.
struct Material {
    platform: Platform,
    analysis: ContentAnalysis,
    topics: TopicReport,
    key_points: Vec<String>,
    main_theme: String,
    tone: Tone,
    content_type: ContentType,
}

impl Material {
    fn gather(text: &str, platform: Platform, analysis: ContentAnalysis) -> Self {
        let main_theme = analysis::extract_main_themes(text).main_theme;
        Self {
            platform,
            analysis,
            topics: topics::extract_topics(text),
            key_points: analysis::extract_key_points_after_opener(text),
            main_theme: if main_theme.is_empty() {
                DEFAULT_THEME.to_string()
            } else {
                main_theme
            },
            tone: detect_tone(text),
            content_type: detect_content_type(text),
        }
    }

    fn closing_call(&self, fallback: &str) -> String {
        self.analysis
            .cta
            .phrases
            .first()
            .map_or_else(|| fallback.to_string(), |phrase| format!("{}!", capitalize(phrase)))
    }

    fn hashtags(&self, count: usize) -> String {
        self.analysis
            .hashtags
            .suggested
            .iter()
            .take(count)
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Render content for a format name (`twitter`, `linkedin` or `instagram`).
///
/// Only those exact names are formats; anything else, including platform
/// aliases, returns [`UNSUPPORTED_FORMAT`].
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn synthesize(format: &str, text: &str) -> String {
    match Platform::ALL.into_iter().find(|p| p.as_str() == format) {
        Some(platform) => synthesize_for(platform, text),
        None => {
            tracing::debug!(format, "no synthesizer for format");
            UNSUPPORTED_FORMAT.to_string()
        }
    }
}

/// Render content for a platform.
pub fn synthesize_for(platform: Platform, text: &str) -> String {
    synthesize_with(platform, text, analysis::analyze_content(text, platform))
}

/// Render content for a platform from an analysis the caller already holds.
///
/// Hashtags, CTA and scores come from `analysis`; key points, themes and
/// tone are still read from `text`.
pub fn synthesize_with(platform: Platform, text: &str, analysis: ContentAnalysis) -> String {
    let material = Material::gather(text, platform, analysis);
    match material.platform {
        Platform::Twitter => render_thread(&material),
        Platform::Linkedin => render_carousel(&material),
        Platform::Instagram => render_script(&material),
    }
}

fn render_thread(m: &Material) -> String {
    let mut tweets = vec![format!("🧵 {}\n\n{}", m.main_theme, thread_opener(m.tone))];

    for (i, point) in m.key_points.iter().enumerate() {
        tweets.push(format!("{} {point}", THREAD_EMOJIS[i % THREAD_EMOJIS.len()]));
    }

    let factors = &m.analysis.engagement.factors;
    if !factors.is_empty() {
        let mut tweet = "Why this lands:".to_string();
        for factor in factors.iter().take(3) {
            let _ = write!(tweet, "\n• {factor}");
        }
        tweets.push(tweet);
    }

    if !m.topics.topics.is_empty() {
        tweets.push(format!("Key areas: {}", m.topics.topics.join(", ")));
    }

    let mut closing = m.closing_call("What's your take? Reply and let's talk 👇");
    let tags = m.hashtags(3);
    if !tags.is_empty() {
        let _ = write!(closing, "\n\n{tags}");
    }
    tweets.push(closing);

    let total = tweets.len();
    tweets
        .iter()
        .enumerate()
        .map(|(i, tweet)| format!("{}/{total} {tweet}", i + 1))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_carousel(m: &Material) -> String {
    let mut slides = vec![format!("{}\n{}", m.main_theme, source_label(m.content_type))];

    if !m.analysis.clarity.issues.is_empty() {
        let mut slide = "The challenge".to_string();
        for issue in &m.analysis.clarity.issues {
            let _ = write!(slide, "\n• {issue}");
        }
        slides.push(slide);
    }

    for (i, point) in m.key_points.iter().enumerate() {
        slides.push(format!(
            "{} Point {}\n{point}",
            SLIDE_EMOJIS[i % SLIDE_EMOJIS.len()],
            i + 1
        ));
    }

    let suggestions = &m.analysis.engagement.suggestions;
    if !suggestions.is_empty() {
        let mut slide = "Next steps".to_string();
        for suggestion in suggestions.iter().take(3) {
            let _ = write!(slide, "\n• {suggestion}");
        }
        slides.push(slide);
    }

    slides.push(format!(
        "Key takeaway\nReading level: {} · {} words\n{}",
        m.analysis.readability.reading_level,
        m.analysis.metrics.word_count,
        m.closing_call("Which point resonates with you most? Share in the comments.")
    ));

    slides
        .iter()
        .enumerate()
        .map(|(i, slide)| format!("Slide {}: {slide}", i + 1))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_script(m: &Material) -> String {
    let a = &m.analysis;
    let problem = a
        .clarity
        .issues
        .first()
        .map_or("Most people overcomplicate this.", String::as_str);
    let implementation = a
        .engagement
        .suggestions
        .first()
        .map_or("Start with one small change today.", String::as_str);
    let points = match m.key_points.as_slice() {
        [] => "1. Keep it simple.".to_string(),
        [only] => format!("1. {only}"),
        [first, second, ..] => format!("1. {first}\n2. {second}"),
    };

    let mut script = String::from("🎬 60-SECOND REEL SCRIPT\n\n");
    let _ = write!(
        script,
        "[0-3s] HOOK\n\"{}\"\n[Visual: Close-up, bold text overlay]\n\n\
         [3-10s] PROBLEM\n\"{problem}\"\n[Visual: Frustrated reaction shot]\n\n\
         [10-15s] SOLUTION\n\"Here's what actually works.\"\n[Visual: Quick cut to you smiling]\n\n\
         [15-35s] KEY POINTS\n{points}\n[Visual: Text overlay for each point]\n\n\
         [35-45s] IMPLEMENTATION\n\"{implementation}\"\n[Visual: Screen recording or demo]\n\n\
         [45-55s] RESULT\nReading level: {} · engagement score {}/100\n[Visual: Before and after]\n\n\
         [55-60s] CTA\n\"{}\"\n[Visual: Point to caption]",
        text::truncate(&m.main_theme, 80),
        a.readability.reading_level,
        a.engagement.score.round(),
        m.closing_call("Follow for more and save this for later!"),
    );

    let tags = m.hashtags(10);
    if !tags.is_empty() {
        let _ = write!(script, "\n\nHASHTAGS\n{tags}");
    }
    script
}

const fn thread_opener(tone: Tone) -> &'static str {
    match tone {
        Tone::Casual => "Let's break it down 👇",
        Tone::Professional => "Key takeaways 👇",
        Tone::Humorous => "Buckle up, this one's good 👇",
        Tone::Inspiring => "This could change how you work 👇",
        Tone::Educational => "Here's what you'll learn 👇",
        Tone::Conversational => "Here's what you need to know 👇",
    }
}

const fn source_label(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Blog => "Lessons from the blog",
        ContentType::VideoScript => "Highlights from the video",
        ContentType::PodcastTranscript => "Takeaways from the episode",
        ContentType::Article => "The article in brief",
        ContentType::Newsletter => "From this week's newsletter",
        ContentType::General => "A quick guide",
    }
}

/// Guess the voice a text is written in.
pub fn detect_tone(text: &str) -> Tone {
    let words = text::extract_words(text);
    let hits = |list: &[&str]| words.iter().filter(|w| list.contains(&w.as_str())).count();

    let sentences = text::split_sentences(text).len().max(1);
    let exclamations = text.matches('!').count();
    if exclamations as f64 / sentences as f64 > CASUAL_EXCLAMATION_RATIO || hits(CASUAL_MARKERS) > 0
    {
        return Tone::Casual;
    }
    if hits(HUMOR_MARKERS) > 0 {
        return Tone::Humorous;
    }
    if hits(RESEARCH_WORDS) >= 2 || text.contains('%') {
        return Tone::Professional;
    }
    if hits(LEARNING_WORDS) > 0 {
        return Tone::Educational;
    }
    if hits(ASPIRATION_WORDS) > 0 {
        return Tone::Inspiring;
    }
    Tone::Conversational
}

/// Guess where a text came from.
pub fn detect_content_type(text: &str) -> ContentType {
    let lower = text.to_lowercase();
    if lower.contains("episode") || lower.contains("listen") {
        ContentType::PodcastTranscript
    } else if lower.contains("video") || lower.contains("watch") {
        ContentType::VideoScript
    } else if lower.contains("newsletter") || lower.contains("this week") {
        ContentType::Newsletter
    } else if lower.contains("blog") || text.lines().any(|l| l.trim_start().starts_with("# ")) {
        ContentType::Blog
    } else if text::split_words(text).len() > ARTICLE_WORDS {
        ContentType::Article
    } else {
        ContentType::General
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
