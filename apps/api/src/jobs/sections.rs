//! Section splitter: carves raw posting text into description, qualifications and benefits,
//! and pulls the sentences that justify a women-friendly classification.

use lazy_static::lazy_static;
use regex::Regex;

use crate::jobs::classifier::WOMEN_FRIENDLY_KEYWORDS;

/// Lines kept from each qualifying section.
const MAX_SECTION_LINES: usize = 5;

const QUALIFICATION_MARKERS: [&str; 3] = ["qualif", "require", "who you are"];
const BENEFIT_MARKERS: [&str; 3] = ["benefit", "offer", "perks"];

lazy_static! {
    /// A known section header alone on its own line.
    static ref SECTION_HEADER: Regex = Regex::new(
        r"\n\s*(?:Requirements|Qualifications|About the Role|Responsibilities|Benefits|What You'll Do|Who You Are)\s*\n"
    )
    .unwrap();

    /// Sentence-ending punctuation followed by whitespace.
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    pub description: String,
    pub qualifications: Vec<String>,
    pub benefits: Vec<String>,
}

/// Splits posting text on known section headers.
///
/// The first segment becomes the description. Every later segment is inspected by its
/// own content: one mentioning qualifications contributes its first five non-blank lines
/// to `qualifications`, one mentioning benefits contributes them to `benefits` (a segment
/// may feed both). With no headers the whole text is the description.
pub fn split_sections(raw_text: &str) -> Sections {
    let segments: Vec<&str> = SECTION_HEADER.split(raw_text).collect();

    if segments.len() <= 1 {
        return Sections {
            description: raw_text.to_string(),
            ..Default::default()
        };
    }

    let mut sections = Sections {
        description: segments[0].trim().to_string(),
        ..Default::default()
    };

    for segment in &segments[1..] {
        let lowered = segment.to_lowercase();
        let lines: Vec<String> = segment
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(MAX_SECTION_LINES)
            .map(str::to_string)
            .collect();

        if QUALIFICATION_MARKERS.iter().any(|m| lowered.contains(m)) {
            sections.qualifications.extend(lines.iter().cloned());
        }
        if BENEFIT_MARKERS.iter().any(|m| lowered.contains(m)) {
            sections.benefits.extend(lines);
        }
    }

    sections
}

/// For each women-friendly keyword present in `description`, the first sentence containing it.
/// Output follows keyword order.
pub fn women_friendly_reasons(description: &str) -> Vec<String> {
    let lowered = description.to_lowercase();
    let sentences = split_sentences(description);

    WOMEN_FRIENDLY_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .filter_map(|keyword| {
            sentences
                .iter()
                .find(|sentence| sentence.to_lowercase().contains(keyword))
                .map(|sentence| sentence.trim().to_string())
        })
        .collect()
}

/// Splits after `.`, `!` or `?` when followed by whitespace; punctuation stays with its sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BREAK.find_iter(text) {
        // The punctuation mark is a single ASCII byte.
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTING: &str = "Join our platform team building payment rails.\n\
        Requirements\n\
        3+ years of Go experience required\n\
        Familiarity with Kubernetes\n\
        \n\
        Strong written communication\n\
        Benefits\n\
        We offer generous parental leave\n\
        Remote-first perks\n\
        Learning stipend\n";

    #[test]
    fn test_no_headers_returns_whole_text() {
        let text = "A short posting with no recognizable headers at all.";
        let sections = split_sections(text);
        assert_eq!(sections.description, text);
        assert!(sections.qualifications.is_empty());
        assert!(sections.benefits.is_empty());
    }

    #[test]
    fn test_first_segment_is_trimmed_description() {
        let sections = split_sections(POSTING);
        assert_eq!(
            sections.description,
            "Join our platform team building payment rails."
        );
    }

    #[test]
    fn test_requirement_segment_feeds_qualifications() {
        let sections = split_sections(POSTING);
        assert_eq!(
            sections.qualifications,
            vec![
                "3+ years of Go experience required",
                "Familiarity with Kubernetes",
                "Strong written communication",
            ]
        );
    }

    #[test]
    fn test_benefit_segment_feeds_benefits() {
        let sections = split_sections(POSTING);
        assert_eq!(
            sections.benefits,
            vec![
                "We offer generous parental leave",
                "Remote-first perks",
                "Learning stipend",
            ]
        );
    }

    #[test]
    fn test_segment_lines_are_capped_at_five() {
        let text = "Intro\nQualifications\nrequired a\nb\nc\nd\ne\nf\ng\n";
        let sections = split_sections(text);
        assert_eq!(sections.qualifications.len(), 5);
        assert_eq!(sections.qualifications[0], "required a");
    }

    #[test]
    fn test_segment_without_markers_is_ignored() {
        let text = "Intro\nResponsibilities\nShip features weekly\nOwn the roadmap\n";
        let sections = split_sections(text);
        assert_eq!(sections.description, "Intro");
        assert!(sections.qualifications.is_empty());
        assert!(sections.benefits.is_empty());
    }

    #[test]
    fn test_reasons_pick_first_sentence_per_keyword() {
        let description = "We are a small team. We champion diversity in hiring! \
            Our culture is diverse and inclusive. Diversity matters.";
        let reasons = women_friendly_reasons(description);
        assert_eq!(
            reasons,
            vec![
                "We champion diversity in hiring!",
                "Our culture is diverse and inclusive.",
                "Our culture is diverse and inclusive.",
            ]
        );
    }

    #[test]
    fn test_reasons_empty_without_keywords() {
        assert!(women_friendly_reasons("Build APIs. Write tests.").is_empty());
    }

    #[test]
    fn test_split_sentences_keeps_punctuation() {
        assert_eq!(
            split_sentences("One. Two? Three!  Four"),
            vec!["One.", "Two?", "Three!", "Four"]
        );
    }
}
