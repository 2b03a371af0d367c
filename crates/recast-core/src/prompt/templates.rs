//! Fixed prompt text: role framing, platform formats, tones, content types.

use crate::analysis::ContentAnalysis;
use crate::cta::CtaStrength;
use crate::platform::{ContentType, Platform, Tone};

/// Role, process and quality bar shared by every prompt.
pub const ROLE_BLOCK: &str = "\
You are an expert social media content strategist who turns long-form writing into \
platform-native posts.

Process:
1. Read the source content and identify its core message and strongest supporting points.
2. Decide which points carry the most value for the target audience.
3. Rewrite them in the target platform's format, voice and length limits.
4. Check the result against the quality bar before answering.

Quality bar:
- Every claim comes from the source; never invent facts, numbers or quotes.
- Each post stands on its own and reads naturally on the platform.
- Open with a hook and close with a clear call to action.
- Output only the finished content, with no commentary about the task.";

/// Output format instructions for a platform.
pub const fn platform_format(platform: Platform) -> &'static str {
    match platform {
        Platform::Twitter => "\
Create a Twitter/X thread:
- Number each tweet (1/, 2/, 3/ ...); aim for 5-10 tweets.
- Target 240-270 characters per tweet and never exceed 280.
- Tweet 1 is a hook that makes people want to read the rest.
- One idea per tweet; use line breaks for scannability.
- The final tweet summarizes and invites replies or reposts.
- Use 1-3 relevant hashtags, only in the final tweet.",
        Platform::Linkedin => "\
Create a LinkedIn carousel:
- 6-8 slides, each labelled \"Slide N: Title\".
- Slide 1 is a bold hook title with a one-line subtitle.
- Middle slides hold one idea each: a short title plus at most 3 bullets of 12 words or fewer.
- The last slide is a takeaway with a call to action (comment, follow, or share).
- After the slides, add a 2-3 sentence post caption and 3-5 hashtags.",
        Platform::Instagram => "\
Create a 60-second Instagram Reel script:
- Use timestamped sections: [0-3s] hook, [3-10s] problem, [10-45s] key points, [45-55s] result, [55-60s] call to action.
- Write the spoken lines plus a visual cue in brackets for each section, e.g. [Visual: close-up of notebook].
- Keep sentences short enough to say in one breath.
- End with a caption of 1-2 sentences and 12-15 hashtags.",
    }
}

/// Style directive for a tone.
pub const fn tone_directive(tone: Tone) -> &'static str {
    match tone {
        Tone::Casual => "Write casually, like texting a smart friend. Contractions and everyday words are welcome.",
        Tone::Professional => "Write with a polished, authoritative voice. Be precise, confident and free of slang.",
        Tone::Humorous => "Write with wit and a light touch. Use playful phrasing, but keep the substance intact.",
        Tone::Inspiring => "Write to uplift and motivate. Emphasize possibility, growth and the reader's potential.",
        Tone::Educational => "Write to teach. Explain clearly, define terms, and build understanding step by step.",
        Tone::Conversational => "Write naturally, as if talking directly to the reader. Use \"you\" and keep it warm.",
    }
}

/// One-line context for where the source came from.
pub const fn content_type_context(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Blog => "The source is a blog post; keep its most actionable advice.",
        ContentType::VideoScript => "The source is a video script; turn spoken delivery into written form.",
        ContentType::PodcastTranscript => "The source is a podcast transcript; drop filler and crosstalk and keep the key quotes and ideas.",
        ContentType::Article => "The source is a long-form article; distill its argument and evidence.",
        ContentType::Newsletter => "The source is a newsletter; pull out the headline insights for a wider audience.",
        ContentType::General => "The source is general written content.",
    }
}

/// Tips for improving the source before or while transforming it.
pub fn improvement_tips(analysis: &ContentAnalysis) -> Vec<String> {
    let mut tips = Vec::new();
    if analysis.readability.flesch_score < 60.0 {
        tips.push("Simplify vocabulary and shorten sentences for social audiences".to_string());
    }
    tips.extend(analysis.engagement.suggestions.iter().take(2).cloned());
    tips.extend(analysis.clarity.improvements.iter().cloned());
    if analysis.cta.strength == CtaStrength::Weak {
        tips.push("End with a clear call to action".to_string());
    }
    tips
}

/// Platform-specific advice conditioned on the analysis.
pub fn platform_recommendations(platform: Platform, analysis: &ContentAnalysis) -> Vec<String> {
    let words = analysis.metrics.word_count;
    let mut recs = Vec::new();
    match platform {
        Platform::Twitter => {
            if words > 500 {
                recs.push("Split the material into a longer thread or a series of threads".to_string());
            } else {
                recs.push("A short thread of 5-7 tweets fits this length".to_string());
            }
            recs.push("Lead with the most surprising number or claim".to_string());
        }
        Platform::Linkedin => {
            recs.push("Frame the carousel around a professional lesson or outcome".to_string());
            if analysis.engagement.score < 60.0 {
                recs.push("Add a personal story or data point to drive comments".to_string());
            }
        }
        Platform::Instagram => {
            recs.push("Open with a visual hook in the first 3 seconds".to_string());
            if words > 300 {
                recs.push("Pick only the two or three strongest points for a 60-second reel".to_string());
            }
        }
    }
    recs
}
