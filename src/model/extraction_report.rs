use std::fmt;

use crate::model::course_record::CourseRecord;

/// Why a card was left out of the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    MissingTitle,
    /// Title node exists but holds only whitespace. The card is dropped
    /// rather than written with an empty `title`.
    BlankTitle,
    MissingLink,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::MissingTitle => "missing title",
            SkipReason::BlankTitle => "blank title",
            SkipReason::MissingLink => "missing link",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedCard {
    /// Zero-based position among all matched cards.
    pub position: usize,
    pub reason: SkipReason,
}

/// Result of one pass over the listing page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub records: Vec<CourseRecord>,
    pub skipped: Vec<SkippedCard>,
}

impl ExtractionReport {
    pub fn cards_seen(&self) -> usize {
        self.records.len() + self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
