//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout.
//!
//! ## Slides
//!
//! ```text
//! Slides for 2014-03-04 (3 slides)
//! 001 03-02
//!     Content: (empty)
//! 002 03-03
//!     Content: B
//! 003 03-04 (active)
//!     Content: A
//! ```
//!
//! ## Build
//!
//! ```text
//! Transport: file
//! Archive: /api/03-slides.json
//! Generated 3 slides → dist/index.html
//! ```

use crate::assemble::SlideSet;
use chrono::NaiveDate;
use std::path::Path;

const PREVIEW_CHARS: usize = 40;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Strip HTML tags from a string (simple angle-bracket stripping).
fn strip_html_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_preview(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn content_preview(markup: &str) -> String {
    let text = strip_html_tags(markup);
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        "(empty)".to_string()
    } else {
        truncate_preview(&text, PREVIEW_CHARS)
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

pub fn format_slide_set(set: &SlideSet, anchor: NaiveDate) -> Vec<String> {
    let mut lines = vec![format!(
        "Slides for {} ({} slide{})",
        anchor,
        set.len(),
        plural(set.len())
    )];
    let active = set.active_index();
    for (i, slide) in set.slides.iter().enumerate() {
        let marker = if Some(i) == active { " (active)" } else { "" };
        lines.push(format!("{} {}{}", format_index(i + 1), slide.date_key, marker));
        lines.push(format!(
            "{}Content: {}",
            indent(1),
            content_preview(&slide.markup)
        ));
    }
    lines
}

pub fn print_slide_set(set: &SlideSet, anchor: NaiveDate) {
    for line in format_slide_set(set, anchor) {
        println!("{}", line);
    }
}

pub fn format_build_output(
    transport: &str,
    archive: &str,
    set: &SlideSet,
    page: &Path,
) -> Vec<String> {
    vec![
        format!("Transport: {}", transport),
        format!("Archive: {}", archive),
        format!(
            "Generated {} slide{} → {}",
            set.len(),
            plural(set.len()),
            page.display()
        ),
    ]
}

pub fn print_build_output(transport: &str, archive: &str, set: &SlideSet, page: &Path) {
    for line in format_build_output(transport, archive, set, page) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::assemble_slides;
    use crate::test_helpers::{anchor_2014_03_04, posts};
    use std::collections::BTreeMap;

    #[test]
    fn strip_html_tags_removes_tags() {
        assert_eq!(strip_html_tags("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn strip_html_tags_empty() {
        assert_eq!(strip_html_tags(""), "");
    }

    #[test]
    fn truncate_preview_short() {
        assert_eq!(truncate_preview("Short text", 40), "Short text");
    }

    #[test]
    fn truncate_preview_exact() {
        let text = "a".repeat(40);
        assert_eq!(truncate_preview(&text, 40), text);
    }

    #[test]
    fn truncate_preview_multibyte() {
        let text = "é".repeat(45);
        assert_eq!(truncate_preview(&text, 40), format!("{}...", "é".repeat(40)));
    }

    #[test]
    fn slide_listing_marks_active_last() {
        let set = assemble_slides(
            anchor_2014_03_04(),
            3,
            &posts(&[("03-04", "<p>A</p>"), ("03-03", "<p>B</p>")]),
        );
        let lines = format_slide_set(&set, anchor_2014_03_04());
        assert_eq!(
            lines,
            vec![
                "Slides for 2014-03-04 (3 slides)",
                "001 03-02",
                "    Content: (empty)",
                "002 03-03",
                "    Content: B",
                "003 03-04 (active)",
                "    Content: A",
            ]
        );
    }

    #[test]
    fn empty_listing_has_only_header() {
        let set = assemble_slides(anchor_2014_03_04(), 0, &BTreeMap::new());
        let lines = format_slide_set(&set, anchor_2014_03_04());
        assert_eq!(lines, vec!["Slides for 2014-03-04 (0 slides)"]);
    }

    #[test]
    fn build_output_lines() {
        let set = assemble_slides(anchor_2014_03_04(), 1, &BTreeMap::new());
        let lines = format_build_output(
            "file",
            "/api/03-slides.json",
            &set,
            Path::new("dist/index.html"),
        );
        assert_eq!(lines[0], "Transport: file");
        assert_eq!(lines[1], "Archive: /api/03-slides.json");
        assert_eq!(lines[2], "Generated 1 slide → dist/index.html");
    }
}
