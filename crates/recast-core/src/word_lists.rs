//! Curated vocabulary tables for content analysis.
//!
//! Emotional words, action verbs, pronouns, passive markers, business jargon,
//! transitions, CTA phrases, stopwords, topic and theme dictionaries, and the
//! hashtag pools keyed by them. Ordered tables are plain slices so that
//! output order is stable; membership tables are `LazyLock<HashSet>`.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words with emotional pull.
pub static EMOTIONAL_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "amazing",
        "incredible",
        "awesome",
        "love",
        "hate",
        "excited",
        "exciting",
        "shocking",
        "surprising",
        "powerful",
        "inspiring",
        "heartbreaking",
        "thrilled",
        "frustrated",
        "fear",
        "afraid",
        "proud",
        "grateful",
        "happy",
        "sad",
        "angry",
        "stunning",
        "brilliant",
        "remarkable",
        "unbelievable",
        "passionate",
        "devastating",
        "joy",
        "beautiful",
        "fantastic",
    ]
    .into_iter()
    .collect()
});

/// Action-oriented verbs.
pub static ACTION_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "discover",
        "learn",
        "build",
        "create",
        "start",
        "transform",
        "unlock",
        "boost",
        "achieve",
        "master",
        "grow",
        "improve",
        "launch",
        "join",
        "try",
        "explore",
        "implement",
        "apply",
        "get",
        "grab",
    ]
    .into_iter()
    .collect()
});

/// First-person pronouns that signal a personal voice.
pub static FIRST_PERSON: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["i", "me", "my", "mine", "we", "us", "our", "ours", "i'm", "i've", "we're"]
        .into_iter()
        .collect()
});

/// Auxiliaries counted as passive-voice markers.
pub static PASSIVE_MARKERS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["was", "were", "been", "being"].into_iter().collect());

/// Business jargon words and phrases.
pub const BUSINESS_JARGON: &[&str] = &[
    "synergy",
    "leverage",
    "paradigm",
    "disrupt",
    "streamline",
    "bandwidth",
    "win-win",
    "game changer",
    "best practice",
    "core competency",
    "value-added",
    "going forward",
    "deep dive",
    "circle back",
    "touch base",
    "low-hanging fruit",
    "move the needle",
    "think outside the box",
    "holistic",
    "actionable insights",
];

/// Transition words and phrases that connect ideas.
pub const TRANSITION_WORDS: &[&str] = &[
    "however",
    "therefore",
    "furthermore",
    "moreover",
    "additionally",
    "consequently",
    "meanwhile",
    "nevertheless",
    "similarly",
    "first",
    "second",
    "finally",
    "for example",
    "for instance",
    "in addition",
    "as a result",
    "on the other hand",
    "in conclusion",
];

/// Call-to-action phrases, matched case-insensitively.
pub const CTA_PHRASES: &[&str] = &[
    "click here",
    "sign up",
    "subscribe",
    "learn more",
    "get started",
    "download",
    "comment below",
    "share this",
    "follow me",
    "follow us",
    "dm me",
    "link in bio",
    "join us",
    "buy now",
    "register now",
    "let me know",
    "tag a friend",
    "check out",
    "visit our",
    "book a call",
];

/// Common English stopwords excluded from keyword extraction.
pub static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "up", "about", "into", "through", "during", "that", "this", "these", "those", "it",
        "its", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "should", "could", "may", "might", "must", "can", "which",
        "who", "when", "where", "why", "how", "if", "than", "then", "as", "so", "not", "no", "you",
        "your", "yours", "they", "them", "their", "what", "there", "here", "all", "any", "some",
        "more", "most", "very", "just", "also", "our", "we", "us", "my", "me", "him", "her",
        "his", "she", "he", "because", "while", "each", "other", "such", "only", "own", "same",
        "too", "out", "over", "again", "further", "once", "both", "few", "many", "much", "every",
        "get", "got", "like", "make", "made", "really", "things", "thing",
    ]
    .into_iter()
    .collect()
});

/// Topic dictionaries, in reporting order.
pub const TOPIC_DICTIONARIES: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "technology",
            "software",
            "ai tools",
            "artificial intelligence",
            "machine learning",
            "apps",
            "digital",
            "code",
            "programming",
            "data",
            "cloud",
            "automation",
            "automate",
            "tech",
        ],
    ),
    (
        "business",
        &[
            "business",
            "marketing",
            "sales",
            "startup",
            "revenue",
            "customer",
            "entrepreneur",
            "strategy",
            "growth",
            "leadership",
            "management",
            "productivity",
            "meetings",
            "brand",
        ],
    ),
    (
        "health",
        &[
            "health",
            "fitness",
            "wellness",
            "nutrition",
            "exercise",
            "mental health",
            "sleep",
            "diet",
            "workout",
            "mindfulness",
            "stress",
        ],
    ),
    (
        "education",
        &[
            "education",
            "learning",
            "teaching",
            "student",
            "course",
            "study",
            "school",
            "knowledge",
            "skill",
            "training",
        ],
    ),
    (
        "creative",
        &[
            "design",
            "artist",
            "creative",
            "writing",
            "photography",
            "music",
            "video",
            "content",
            "storytelling",
            "creativity",
        ],
    ),
];

/// Theme patterns, in reporting order.
pub const THEME_PATTERNS: &[(&str, &[&str])] = &[
    (
        "tutorial",
        &["how to", "step by step", "guide", "tutorial", "walkthrough", "first,", "second,"],
    ),
    (
        "tips",
        &["tips", "tricks", "hacks", "ways to", "secrets", "mistakes", "lessons"],
    ),
    (
        "review",
        &["review", "pros and cons", "compared", "versus", " vs ", "verdict", "tested"],
    ),
    (
        "news",
        &["announced", "breaking", "update", "released", "launches", "just launched", "news"],
    ),
];

/// Three hashtags per detected topic.
pub const TOPIC_HASHTAGS: &[(&str, [&str; 3])] = &[
    ("technology", ["#Tech", "#Innovation", "#DigitalTransformation"]),
    ("business", ["#Business", "#Entrepreneurship", "#Leadership"]),
    ("health", ["#Health", "#Wellness", "#HealthyLiving"]),
    ("education", ["#Education", "#Learning", "#Growth"]),
    ("creative", ["#Creativity", "#Design", "#ContentCreation"]),
];

/// Two hashtags per detected theme.
pub const THEME_HASHTAGS: &[(&str, [&str; 2])] = &[
    ("tutorial", ["#Tutorial", "#HowTo"]),
    ("tips", ["#Tips", "#ProTips"]),
    ("review", ["#Review", "#HonestReview"]),
    ("news", ["#News", "#Trending"]),
];

/// Low-specificity hashtags sorted to the end of suggestions.
pub const GENERIC_HASHTAGS: &[&str] = &["#Daily", "#Motivation", "#Tips"];

/// Words that flag a sentence as carrying a key idea.
pub const INDICATOR_WORDS: &[&str] = &[
    "important",
    "key",
    "essential",
    "crucial",
    "critical",
    "significant",
    "main",
    "best",
    "secret",
    "lesson",
    "tip",
    "strategy",
    "benefit",
    "result",
    "mistake",
    "insight",
    "truth",
    "first",
];

/// Openers and phrases that make a sentence actionable.
pub const IMPERATIVE_MARKERS: &[&str] = &[
    "you should",
    "you can",
    "you need",
    "make sure",
    "don't",
    "avoid",
    "start",
    "stop",
    "try",
    "use",
    "focus on",
    "remember",
];

/// Phrases that compare alternatives.
pub const COMPARATIVE_MARKERS: &[&str] = &[
    "better",
    "worse",
    "faster",
    "more than",
    "less than",
    "instead of",
    "compared to",
    "rather than",
    "versus",
];

/// Benefit and outcome vocabulary used to spot value propositions.
pub const VALUE_WORDS: &[&str] = &[
    "benefit",
    "save",
    "improve",
    "increase",
    "boost",
    "reduce",
    "help",
    "achieve",
    "gain",
    "grow",
    "results",
    "reclaim",
    "faster",
    "easier",
    "without",
];

/// Slang that marks a casual voice.
pub const CASUAL_MARKERS: &[&str] = &[
    "gonna", "wanna", "kinda", "gotta", "hey", "yeah", "cool", "super", "stuff", "btw",
];

/// Words that mark a humorous voice.
pub const HUMOR_MARKERS: &[&str] = &[
    "lol", "haha", "funny", "joke", "jokes", "hilarious", "laugh", "lmao", "silly", "ridiculous",
];

/// Data and research vocabulary that marks a professional voice.
pub const RESEARCH_WORDS: &[&str] = &[
    "data", "research", "study", "studies", "analysis", "evidence", "statistics", "survey",
    "according", "report", "findings", "percent",
];

/// Learning vocabulary that marks an educational voice.
pub const LEARNING_WORDS: &[&str] = &[
    "learn", "learning", "understand", "lesson", "guide", "explain", "tutorial", "teach",
    "example", "concept",
];

/// Aspiration vocabulary that marks an inspiring voice.
pub const ASPIRATION_WORDS: &[&str] = &[
    "dream", "dreams", "inspire", "believe", "achieve", "journey", "potential", "passion",
    "purpose", "possible",
];
