//! Classification report for the `classify` command.
use crate::classify::{Classification, ClassifiedLine};
use crate::diagnostics::Warning;
use crate::metrics::DistanceProfile;
use crate::patterns::ListPatterns;
use serde::Serialize;

/// Current schema version for the JSON report.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineTag {
    Leading,
    Element,
    Unparsed,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineRow {
    pub index: usize,
    pub tag: LineTag,
    pub original: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Digits of the original numbering prefix, when one was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_number: Option<String>,
    pub length: usize,
    pub symbol_count: usize,
    pub distance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub schema_version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading_text: Option<String>,
    pub lines: Vec<LineRow>,
    #[serde(flatten)]
    pub profile: DistanceProfile,
    pub first_line_dist: f64,
    pub threshold: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}

impl ClassificationReport {
    /// `originals` must be the lines that produced `classification`.
    pub fn new(originals: &[String], classification: &Classification) -> Self {
        let patterns = ListPatterns::new();
        let lines = originals
            .iter()
            .zip(&classification.lines)
            .zip(&classification.metrics)
            .enumerate()
            .map(|(index, ((original, line), metrics))| {
                let tag = match line {
                    _ if index == 0 && classification.leading_text.is_some() => LineTag::Leading,
                    ClassifiedLine::Element(_) => LineTag::Element,
                    ClassifiedLine::Unparsed(_) => LineTag::Unparsed,
                };
                let content = match (tag, line) {
                    (LineTag::Element, ClassifiedLine::Element(content)) => Some(content.clone()),
                    _ => None,
                };
                let original_number = match tag {
                    LineTag::Element => patterns
                        .separator
                        .split(original)
                        .and_then(|parts| patterns.prefix.find(parts.prefix))
                        .map(|prefix| prefix.number.to_string()),
                    _ => None,
                };
                LineRow {
                    index,
                    tag,
                    original: original.clone(),
                    content,
                    original_number,
                    length: metrics.length,
                    symbol_count: metrics.symbol_count,
                    distance: metrics.distance(&classification.profile),
                }
            })
            .collect();

        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            leading_text: classification.leading_text.clone(),
            lines,
            profile: classification.profile,
            first_line_dist: classification.first_line_dist,
            threshold: classification.profile.threshold(),
            warnings: classification.warnings.clone(),
        }
    }

    /// Human-readable table, one row per line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        match &self.leading_text {
            Some(text) => out.push_str(&format!("leading text: {text}\n")),
            None => out.push_str("leading text: <none>\n"),
        }
        for row in &self.lines {
            let tag = match row.tag {
                LineTag::Leading => "leading",
                LineTag::Element => "element",
                LineTag::Unparsed => "unparsed",
            };
            let shown = row.content.as_deref().unwrap_or(&row.original);
            out.push_str(&format!(
                "{:>3} {:<8} len={:<3} sym={:<2} dist={:>7.3}  {}\n",
                row.index, tag, row.length, row.symbol_count, row.distance, shown
            ));
        }
        out.push_str(&format!(
            "first line distance {:.3}, threshold {:.3} (spread {:.3})",
            self.first_line_dist, self.threshold, self.profile.dist_std_deviation
        ));
        for warning in &self.warnings {
            out.push_str(&format!("\nwarning: {warning}"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::diagnostics::testing::RecordingLogger;

    fn report_for(raw: &[&str]) -> ClassificationReport {
        let lines: Vec<String> = raw.iter().map(|line| line.to_string()).collect();
        let classification = classify(&lines, &ListPatterns::new(), &RecordingLogger::default())
            .expect("classification");
        ClassificationReport::new(&lines, &classification)
    }

    #[test]
    fn tags_every_line() {
        let report = report_for(&["Intro", "1. alpha", "NOTE", "(2) beta"]);
        let tags: Vec<LineTag> = report.lines.iter().map(|row| row.tag).collect();
        assert_eq!(
            tags,
            vec![
                LineTag::Leading,
                LineTag::Element,
                LineTag::Unparsed,
                LineTag::Element
            ]
        );
        assert_eq!(report.lines[1].content.as_deref(), Some("alpha"));
        assert_eq!(report.lines[3].original_number.as_deref(), Some("2"));
        assert_eq!(report.lines[2].content, None);
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn json_carries_schema_version_and_statistics() {
        let report = report_for(&["Please see below:", "1. foo", "2. bar", "3. baz"]);
        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["leading_text"], "Please see below:");
        assert_eq!(value["average_len"], 6.0);
        assert_eq!(value["dist_std_deviation"], 0.0);
        assert_eq!(value["threshold"], 0.0);
        assert_eq!(value["lines"][0]["tag"], "leading");
        assert_eq!(value["lines"][1]["original_number"], "1");
        assert!(value.get("warnings").is_none());
    }

    #[test]
    fn text_view_lists_warnings_last() {
        let report = report_for(&["Intro", "1. alpha", "NOTE", "2. beta"]);
        let text = report.to_text();
        assert!(text.starts_with("leading text: Intro\n"));
        let last = text.lines().next_back().expect("lines");
        assert_eq!(last, format!("warning: {}", Warning::FirstLineUnparsed));
        assert!(text.contains("unparsed"));
    }
}
