//! Splits generated framework text into titled sections.
//!
//! The generation service is asked to emit `### N. Title` headings. Nothing
//! guarantees it does, so parsing never fails: text without any heading
//! yields no sections and the caller falls back to showing the raw text.

/// Heading marker that opens a section.
pub const SECTION_MARKER: &str = "### ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkSection {
    pub title: String,
    pub content: String,
}

impl FrameworkSection {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    fn from_fragment(fragment: &str) -> Self {
        match fragment.find('\n') {
            Some(idx) => Self::new(fragment[..idx].trim(), fragment[idx + 1..].trim()),
            None => Self::new(fragment.trim(), ""),
        }
    }

    pub fn kind(&self) -> SectionKind {
        SectionKind::from_title(&self.title)
    }

    /// Content lines, classified for display.
    pub fn lines(&self) -> impl Iterator<Item = ContentLine<'_>> {
        self.content.lines().map(classify_line)
    }
}

/// Parse `text` into sections on [`SECTION_MARKER`].
///
/// Returns an empty vector when the marker never occurs. A blank fragment in
/// front of the first marker is dropped; a non-blank one is kept as a leading
/// section titled by its first line.
pub fn parse_sections(text: &str) -> Vec<FrameworkSection> {
    if !text.contains(SECTION_MARKER) {
        return Vec::new();
    }

    let mut fragments = text.split(SECTION_MARKER);
    let mut sections = Vec::new();

    if let Some(preamble) = fragments.next() {
        if !preamble.trim().is_empty() {
            sections.push(FrameworkSection::from_fragment(preamble));
        }
    }
    sections.extend(fragments.map(FrameworkSection::from_fragment));
    sections
}

/// Which part of the five-part framework a section covers, judged by title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Phenomenon,
    Questions,
    Model,
    Results,
    Contribution,
    Other,
}

impl SectionKind {
    pub fn from_title(title: &str) -> Self {
        let lower = title.to_lowercase();
        if lower.contains("phenomenon") {
            SectionKind::Phenomenon
        } else if lower.contains("question") {
            SectionKind::Questions
        } else if lower.contains("model") {
            SectionKind::Model
        } else if lower.contains("result") {
            SectionKind::Results
        } else if lower.contains("contribution") {
            SectionKind::Contribution
        } else {
            SectionKind::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLine<'a> {
    /// A `-` or `*` item, marker and following whitespace stripped.
    Bullet(&'a str),
    Blank,
    /// Any other line, as written.
    Paragraph(&'a str),
}

pub fn classify_line(line: &str) -> ContentLine<'_> {
    let trimmed = line.trim();
    if trimmed.starts_with('-') || trimmed.starts_with('*') {
        // both markers are one byte wide
        ContentLine::Bullet(trimmed[1..].trim())
    } else if trimmed.is_empty() {
        ContentLine::Blank
    } else {
        ContentLine::Paragraph(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_two_well_formed_sections() {
        let sections = parse_sections("### T1\nC1\n### T2\nC2");
        assert_eq!(
            sections,
            vec![FrameworkSection::new("T1", "C1"), FrameworkSection::new("T2", "C2")]
        );
    }

    #[test]
    fn no_marker_yields_nothing() {
        assert!(parse_sections("No response generated.").is_empty());
        assert!(parse_sections("## 1. Not quite\nbody").is_empty());
        assert!(parse_sections("###NoSpace\nbody").is_empty());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_sections("").is_empty());
    }

    #[test]
    fn title_and_content_are_trimmed() {
        let sections = parse_sections("###  1. Phenomenon & Context  \r\n\n  Reviews matter.\n\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "1. Phenomenon & Context");
        assert_eq!(sections[0].content, "Reviews matter.");
    }

    #[test]
    fn fragment_without_line_break_is_all_title() {
        let sections = parse_sections("### Intro\nText\n### Closing");
        assert_eq!(sections[1], FrameworkSection::new("Closing", ""));
    }

    #[test]
    fn blank_preamble_is_dropped() {
        let sections = parse_sections("\n\n### A\nx");
        assert_eq!(sections, vec![FrameworkSection::new("A", "x")]);
    }

    #[test]
    fn preamble_before_first_heading_becomes_a_section() {
        let sections = parse_sections("Here is your framework:\n\n### A\nx");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0], FrameworkSection::new("Here is your framework:", ""));
        assert_eq!(sections[1].title, "A");
    }

    #[test]
    fn heading_marker_inside_deeper_heading_still_splits() {
        let sections = parse_sections("### A\nx\n#### Detail\ny");
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "Detail"]);
        assert_eq!(sections[0].content, "x\n#");
    }

    #[test]
    fn bullet_markers_are_stripped() {
        assert_eq!(classify_line("- Pricing"), ContentLine::Bullet("Pricing"));
        assert_eq!(classify_line("  *   Reviews "), ContentLine::Bullet("Reviews"));
        assert_eq!(classify_line("-"), ContentLine::Bullet(""));
    }

    #[test]
    fn blank_and_paragraph_lines() {
        assert_eq!(classify_line("   "), ContentLine::Blank);
        assert_eq!(classify_line("  Plain text"), ContentLine::Paragraph("  Plain text"));
    }

    #[test]
    fn section_lines_are_classified_in_order() {
        let section = FrameworkSection::new("Q", "Intro\n\n- Q1\n* Q2");
        let lines: Vec<_> = section.lines().collect();
        assert_eq!(
            lines,
            vec![
                ContentLine::Paragraph("Intro"),
                ContentLine::Blank,
                ContentLine::Bullet("Q1"),
                ContentLine::Bullet("Q2"),
            ]
        );
    }

    #[test]
    fn section_kind_follows_title_keywords() {
        assert_eq!(SectionKind::from_title("1. Phenomenon & Context"), SectionKind::Phenomenon);
        assert_eq!(SectionKind::from_title("2. Research Questions"), SectionKind::Questions);
        assert_eq!(SectionKind::from_title("3. Formal Model Design Principles"), SectionKind::Model);
        assert_eq!(
            SectionKind::from_title("4. Anticipated Model Solution & Results Characteristics"),
            SectionKind::Model
        );
        assert_eq!(SectionKind::from_title("Anticipated Results"), SectionKind::Results);
        assert_eq!(SectionKind::from_title("5. Interpretation & Contribution"), SectionKind::Contribution);
        assert_eq!(SectionKind::from_title("Appendix"), SectionKind::Other);
    }
}
