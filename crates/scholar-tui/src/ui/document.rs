//! Turns a generated framework into styled terminal lines.

use ratatui::text::{Line, Span};
use scholar_core::{parse_sections, ContentLine, FrameworkSection};

use super::styles::Styles;

const INDENT: &str = "   ";

/// Lines for `result`: one block per parsed section, separated by a rule.
/// When nothing parses, the raw text as-is.
pub fn framework_lines(result: &str, width: u16) -> Vec<Line<'static>> {
    let sections = parse_sections(result);
    if sections.is_empty() {
        return raw_lines(result);
    }

    let rule = "─".repeat(width.saturating_sub(INDENT.len() as u16) as usize);
    let mut lines = Vec::new();
    for (idx, section) in sections.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::default());
            lines.push(Line::styled(format!("{INDENT}{rule}"), Styles::separator()));
            lines.push(Line::default());
        }
        section_lines(section, &mut lines);
    }
    lines
}

pub fn raw_lines(text: &str) -> Vec<Line<'static>> {
    text.lines().map(|line| Line::styled(line.to_string(), Styles::default())).collect()
}

fn section_lines(section: &FrameworkSection, lines: &mut Vec<Line<'static>>) {
    let (glyph, glyph_style) = Styles::section_marker(section.kind());
    lines.push(Line::from(vec![
        Span::styled(format!("{glyph} "), glyph_style),
        Span::styled(section.title.clone(), Styles::section_title()),
    ]));

    if section.content.is_empty() {
        return;
    }
    lines.push(Line::default());

    for line in section.lines() {
        lines.push(match line {
            ContentLine::Bullet(text) => Line::from(vec![
                Span::styled(format!("{INDENT}• "), Styles::bullet()),
                Span::styled(text.to_string(), Styles::default()),
            ]),
            ContentLine::Blank => Line::default(),
            ContentLine::Paragraph(text) => Line::styled(format!("{INDENT}{text}"), Styles::default()),
        });
    }
}
