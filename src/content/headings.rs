//! Heading outline extraction
//!
//! Headings are read straight from the raw lines, not from a markdown parse.
//! A `#` line only counts when the word after the first space starts with an
//! uppercase ASCII letter, so `# install deps` is never part of the outline.

use lazy_static::lazy_static;
use regex::Regex;

use super::Heading;

lazy_static! {
    static ref LEVEL: Regex = Regex::new(r"^#{1,5}").unwrap();
    static ref MARKER: Regex = Regex::new(r"^#{1,5}\s").unwrap();
}

/// Extract the heading outline of a document, in line order
pub fn extract_headings(content: &str) -> Vec<Heading> {
    content
        .split('\n')
        .filter(|line| is_heading_line(line))
        .filter_map(|line| {
            let level = LEVEL.find(line)?.len();
            let value = MARKER.replace(line, "").into_owned();
            Some(Heading { level, value })
        })
        .collect()
}

fn is_heading_line(line: &str) -> bool {
    if !line.starts_with('#') {
        return false;
    }

    line.split(' ')
        .nth(1)
        .and_then(|word| word.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_headings_are_skipped() {
        let content = "# Hello\n# world\n## Second Thing\n";
        assert_eq!(
            extract_headings(content),
            vec![Heading::new(1, "Hello"), Heading::new(2, "Second Thing")]
        );
    }

    #[test]
    fn test_levels() {
        let content = "### Third\nbody text\n##### Fifth\n";
        let headings = extract_headings(content);
        assert_eq!(headings[0], Heading::new(3, "Third"));
        assert_eq!(headings[1], Heading::new(5, "Fifth"));
    }

    #[test]
    fn test_document_order_and_non_heading_lines() {
        let content = "---\ntitle: X\n---\nIntro\n## B Section\ntext # Not\n# A Section\n";
        let values: Vec<_> = extract_headings(content)
            .into_iter()
            .map(|h| h.value)
            .collect();
        assert_eq!(values, vec!["B Section", "A Section"]);
    }

    #[test]
    fn test_marker_quirks_are_kept() {
        // No space after the marker: the word check looks at the next space-separated word
        assert_eq!(
            extract_headings("#Hello World"),
            vec![Heading::new(1, "#Hello World")]
        );
        // Six markers are capped at level five and the marker is left in place
        assert_eq!(
            extract_headings("###### Deep"),
            vec![Heading::new(5, "###### Deep")]
        );
        // A double space leaves an empty second word
        assert!(extract_headings("##  Spaced").is_empty());
        assert!(extract_headings("#").is_empty());
    }

    #[test]
    fn test_non_ascii_capital_is_skipped() {
        assert!(extract_headings("# Ärger").is_empty());
    }
}
