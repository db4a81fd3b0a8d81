use crate::markup::Markup;
use crate::models::{HeadingFinding, HeadingLevel, HeadingStatus};
use std::collections::BTreeSet;

/// Builds one finding per heading element, grouped by level (all H1s, then all H2s, ...).
///
/// Runs in two passes: per-element defect rules first, then a hierarchy pass that
/// overwrites every heading at a level reached by skipping one or more levels.
pub fn analyze(markup: &dyn Markup) -> Vec<HeadingFinding> {
    let mut findings = Vec::new();
    let mut levels_present = BTreeSet::new();

    for level in HeadingLevel::ALL {
        let elements = markup.select(level.tag());
        let level_count = elements.len();

        for element in elements {
            levels_present.insert(level);
            let content = element.text().trim().to_string();

            let (status, message) = if content.is_empty() {
                (HeadingStatus::Error, Some("Empty heading"))
            } else if level == HeadingLevel::H1 && level_count > 1 {
                (
                    HeadingStatus::Warning,
                    Some("Multiple H1 headings (should have only one)"),
                )
            } else {
                (HeadingStatus::Good, None)
            };

            findings.push(HeadingFinding {
                level,
                content,
                status,
                message: message.map(str::to_string),
            });
        }
    }

    mark_skipped_levels(&mut findings, &levels_present);
    findings
}

fn mark_skipped_levels(findings: &mut [HeadingFinding], levels_present: &BTreeSet<HeadingLevel>) {
    let levels: Vec<HeadingLevel> = levels_present.iter().copied().collect();

    for pair in levels.windows(2) {
        let (previous, next) = (pair[0], pair[1]);
        if next.number() > previous.number() + 1 {
            let message = format!("Skipped H{} in hierarchy", next.number() - 1);
            for finding in findings.iter_mut().filter(|f| f.level == next) {
                finding.status = HeadingStatus::Warning;
                finding.message = Some(message.clone());
            }
        }
    }
}

pub fn count_level(findings: &[HeadingFinding], level: HeadingLevel) -> usize {
    findings.iter().filter(|f| f.level == level).count()
}
