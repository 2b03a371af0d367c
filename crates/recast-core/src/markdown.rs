//! Markdown intake.
//!
//! Source posts often arrive as markdown. Analysis works on plain text with
//! blank-line paragraph breaks, so formatting is flattened here with
//! pulldown-cmark. Headings survive as `# Title` lines because theme
//! extraction reads them as sub-themes.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Flatten markdown into analyzable plain text.
///
/// - Headings become a single `# Title` line, regardless of level.
/// - Paragraphs, list items and blockquotes become their own blocks.
/// - Emphasis markers, link targets and image URLs are dropped.
/// - Code blocks, HTML and YAML frontmatter are removed.
/// - Inline code keeps its text.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn to_plain_text(text: &str) -> String {
    let text = strip_frontmatter(text);
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;

    let mut blocks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_code = false;

    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code = true,
            Event::End(TagEnd::CodeBlock) => in_code = false,
            Event::Start(Tag::Heading { .. }) => {
                flush(&mut blocks, &mut current);
                current.push_str("# ");
            }
            Event::Start(Tag::Item) => flush(&mut blocks, &mut current),
            Event::End(
                TagEnd::Heading(_) | TagEnd::Paragraph | TagEnd::Item | TagEnd::TableRow,
            ) => flush(&mut blocks, &mut current),
            Event::Text(t) | Event::Code(t) if !in_code => current.push_str(&t),
            Event::SoftBreak | Event::HardBreak => current.push(' '),
            Event::End(TagEnd::TableCell) => current.push(' '),
            _ => {}
        }
    }
    flush(&mut blocks, &mut current);

    blocks.join("\n\n")
}

/// Whether a file name looks like markdown.
pub fn is_markdown_path(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.ends_with(".md") || lower.ends_with(".markdown")
}

fn flush(blocks: &mut Vec<String>, current: &mut String) {
    let block = current.trim();
    if !block.is_empty() && block != "#" {
        blocks.push(block.to_string());
    }
    current.clear();
}

/// Drop YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };
    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_become_hash_lines() {
        let out = to_plain_text("## Why rest matters\n\nSleep is *productive*.");
        assert_eq!(out, "# Why rest matters\n\nSleep is productive.");
    }

    #[test]
    fn code_blocks_are_removed() {
        let out = to_plain_text("Before.\n\n```rust\nlet x = 1;\n```\n\nAfter.");
        assert!(!out.contains("let x"));
        assert_eq!(out, "Before.\n\nAfter.");
    }

    #[test]
    fn inline_code_keeps_text() {
        assert_eq!(to_plain_text("Run `cargo fmt` daily."), "Run cargo fmt daily.");
    }

    #[test]
    fn frontmatter_is_removed() {
        let out = to_plain_text("---\ntitle: Notes\n---\n\nSome text.");
        assert_eq!(out, "Some text.");
    }

    #[test]
    fn links_keep_visible_text() {
        let out = to_plain_text("Read [the guide](https://example.com) first.");
        assert_eq!(out, "Read the guide first.");
    }

    #[test]
    fn list_items_are_separate_blocks() {
        let out = to_plain_text("Tips:\n\n- Start early\n- Rest often\n");
        assert_eq!(out, "Tips:\n\nStart early\n\nRest often");
    }

    #[test]
    fn soft_breaks_join_lines() {
        assert_eq!(to_plain_text("One line\nsame paragraph."), "One line same paragraph.");
    }

    #[test]
    fn markdown_paths() {
        assert!(is_markdown_path("post.MD"));
        assert!(is_markdown_path("notes/draft.markdown"));
        assert!(!is_markdown_path("post.txt"));
    }

    #[test]
    fn empty_input() {
        assert!(to_plain_text("").is_empty());
    }
}
