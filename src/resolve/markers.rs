//! Conflict marker prefixes.

/// Opens the current-branch side of a conflict.
pub const START_MARKER: &str = "<<<<<<<";

/// Separates the current-branch side from the incoming side.
pub const DIVIDER_MARKER: &str = "=======";

/// Closes the incoming side of a conflict.
pub const END_MARKER: &str = ">>>>>>>";

/// A recognized conflict marker line.
///
/// Classification is by prefix only. Anything after the seven marker
/// characters (`HEAD`, a branch name, a commit summary) is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start,
    Divider,
    End,
}

impl Marker {
    /// Classify a line by its leading marker prefix, if any.
    ///
    /// This does not consider region state: a divider outside a conflict is
    /// still classified as [`Marker::Divider`]. The region machine decides
    /// whether it acts as one.
    pub fn classify(line: &str) -> Option<Marker> {
        [Marker::Start, Marker::Divider, Marker::End]
            .into_iter()
            .find(|marker| line.starts_with(marker.prefix()))
    }

    /// The seven-character prefix that identifies this marker.
    pub fn prefix(self) -> &'static str {
        match self {
            Marker::Start => START_MARKER,
            Marker::Divider => DIVIDER_MARKER,
            Marker::End => END_MARKER,
        }
    }
}
