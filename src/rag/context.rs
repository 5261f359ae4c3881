//! Context formatting for the model prompt.
//!
//! Renders retrieved passages as page-labelled preview lines: one line per
//! page (first passage on a page wins), previews cut to a fixed length, and
//! the whole block capped at a fixed line count. The caps are part of the
//! output contract and must not drift.

use std::collections::HashSet;

use super::store::Passage;

/// Maximum characters of passage text kept in a preview line.
pub const PREVIEW_MAX_CHARS: usize = 220;
/// Maximum number of context lines handed to the model.
pub const MAX_CONTEXT_LINES: usize = 5;

const UNKNOWN_PAGE: &str = "?";

/// Format retrieved passages into the context block, in retrieval-rank order.
/// An empty passage list yields an empty string.
pub fn format_context(passages: &[Passage]) -> String {
    let mut seen_pages: HashSet<Option<u32>> = HashSet::new();
    let mut lines: Vec<String> = Vec::new();

    for passage in passages {
        // Page-level dedup: later passages on an already-seen page are
        // skipped even when their content differs. Unknown pages share the
        // sentinel and dedup together.
        if !seen_pages.insert(passage.page) {
            continue;
        }

        let line = match passage.page {
            Some(page) => format!("Page {:>3} | {}", page, preview(&passage.text)),
            None => format!("Page {:>3} | {}", UNKNOWN_PAGE, preview(&passage.text)),
        };
        lines.push(line);
    }

    lines.truncate(MAX_CONTEXT_LINES);
    lines.join("\n")
}

fn preview(text: &str) -> String {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let mut preview: String = chars.by_ref().take(PREVIEW_MAX_CHARS).collect();
    if chars.next().is_some() {
        preview.push('…');
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(text: &str, page: Option<u32>) -> Passage {
        Passage {
            text: text.to_string(),
            page,
            score: 0.9,
        }
    }

    #[test]
    fn first_passage_per_page_wins() {
        let passages = vec![
            passage("first on page 12", Some(12)),
            passage("second on page 12, different text", Some(12)),
            passage("first on page 40", Some(40)),
        ];

        let context = format_context(&passages);
        let lines: Vec<&str> = context.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("first on page 12"));
        assert!(!context.contains("second on page 12"));
        assert!(lines[1].contains("first on page 40"));
    }

    #[test]
    fn caps_output_at_five_lines() {
        let passages: Vec<Passage> = (1..=8)
            .map(|page| passage(&format!("text for page {}", page), Some(page)))
            .collect();

        let context = format_context(&passages);

        assert_eq!(context.lines().count(), MAX_CONTEXT_LINES);
        assert!(context.contains("text for page 5"));
        assert!(!context.contains("text for page 6"));
    }

    #[test]
    fn long_text_is_cut_at_preview_length_with_ellipsis() {
        let long_text = "x".repeat(PREVIEW_MAX_CHARS + 50);
        let context = format_context(&[passage(&long_text, Some(3))]);

        let preview_part = context.split(" | ").nth(1).unwrap();
        assert_eq!(preview_part.chars().count(), PREVIEW_MAX_CHARS + 1);
        assert!(preview_part.ends_with('…'));
    }

    #[test]
    fn short_text_is_trimmed_without_ellipsis() {
        let context = format_context(&[passage("  terrain theory  ", Some(3))]);

        assert_eq!(context, "Page   3 | terrain theory");
    }

    #[test]
    fn text_at_exact_preview_length_is_not_truncated() {
        let exact = "y".repeat(PREVIEW_MAX_CHARS);
        let context = format_context(&[passage(&exact, Some(9))]);

        let preview_part = context.split(" | ").nth(1).unwrap();
        assert_eq!(preview_part.chars().count(), PREVIEW_MAX_CHARS);
        assert!(!preview_part.ends_with('…'));
    }

    #[test]
    fn missing_page_renders_sentinel_and_dedups_together() {
        let passages = vec![
            passage("no page metadata", None),
            passage("also no page metadata", None),
        ];

        let context = format_context(&passages);

        assert_eq!(context, "Page   ? | no page metadata");
    }

    #[test]
    fn pages_are_right_aligned_to_width_three() {
        let passages = vec![
            passage("a", Some(7)),
            passage("b", Some(42)),
            passage("c", Some(128)),
        ];

        let context = format_context(&passages);
        let lines: Vec<&str> = context.lines().collect();

        assert_eq!(lines[0], "Page   7 | a");
        assert_eq!(lines[1], "Page  42 | b");
        assert_eq!(lines[2], "Page 128 | c");
    }

    #[test]
    fn empty_input_yields_empty_context() {
        assert_eq!(format_context(&[]), "");
    }
}
