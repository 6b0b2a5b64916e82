//! Single forward pass over a file's lines.

use super::markers::Marker;
use super::region::{LineAction, Region};

/// Outcome of scanning one file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Retained lines, concatenated with their original terminators.
    pub content: String,
    /// Whether any start marker was seen.
    pub found_conflict: bool,
    /// Number of start markers seen.
    pub conflicts: usize,
    /// Lines emitted into `content`.
    pub lines_kept: usize,
    /// Marker lines plus current-branch lines.
    pub lines_dropped: usize,
    /// Region the scan ended in.
    pub final_region: Region,
}

impl Resolution {
    /// The file ended inside a conflict block.
    ///
    /// Nothing is done about it beyond reporting: lines already consumed
    /// under the open region were kept or dropped as that region dictates.
    pub fn is_unterminated(&self) -> bool {
        !self.final_region.is_terminal()
    }
}

/// Resolve every conflict in `text` in favour of the incoming side.
///
/// Lines are split after each `\n` so terminators (including `\r\n`) are
/// carried through unchanged. A final line with no terminator is kept as is.
pub fn resolve_text(text: &str) -> Resolution {
    let mut region = Region::default();
    let mut content = String::with_capacity(text.len());
    let mut conflicts = 0;
    let mut lines_kept = 0;
    let mut lines_dropped = 0;

    for line in text.split_inclusive('\n') {
        let marker = Marker::classify(line);
        if marker == Some(Marker::Start) {
            conflicts += 1;
        }

        let step = region.transition(marker);
        match step.action {
            LineAction::Keep => {
                content.push_str(line);
                lines_kept += 1;
            }
            LineAction::Consume | LineAction::Discard => lines_dropped += 1,
        }
        region = step.next;
    }

    Resolution {
        content,
        found_conflict: conflicts > 0,
        conflicts,
        lines_kept,
        lines_dropped,
        final_region: region,
    }
}
