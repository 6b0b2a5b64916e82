//! Region state machine for a single file scan.

use super::markers::Marker;

/// Where the scan currently is relative to a conflict block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    /// Outside any conflict.
    #[default]
    Unconflicted,
    /// Between a start marker and a divider: current-branch side.
    InCurrent,
    /// Between a divider and an end marker: incoming side.
    InIncoming,
}

/// What to do with the line that produced a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    /// The line acted as a marker and is not emitted.
    Consume,
    /// Content line that is emitted.
    Keep,
    /// Content line that is dropped.
    Discard,
}

/// Result of feeding one line to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub next: Region,
    pub action: LineAction,
}

impl Region {
    /// Transition table.
    ///
    /// | region       | marker   | next         | action  |
    /// |--------------|----------|--------------|---------|
    /// | any          | Start    | InCurrent    | Consume |
    /// | InCurrent    | Divider  | InIncoming   | Consume |
    /// | InIncoming   | End      | Unconflicted | Consume |
    /// | InCurrent    | other    | InCurrent    | Discard |
    /// | InIncoming   | other    | InIncoming   | Keep    |
    /// | Unconflicted | other    | Unconflicted | Keep    |
    ///
    /// A divider or end marker seen in the wrong region is plain content.
    pub fn transition(self, marker: Option<Marker>) -> Step {
        let consume = |next| Step {
            next,
            action: LineAction::Consume,
        };

        match (self, marker) {
            (_, Some(Marker::Start)) => consume(Region::InCurrent),
            (Region::InCurrent, Some(Marker::Divider)) => consume(Region::InIncoming),
            (Region::InIncoming, Some(Marker::End)) => consume(Region::Unconflicted),
            (Region::InCurrent, _) => Step {
                next: Region::InCurrent,
                action: LineAction::Discard,
            },
            (region, _) => Step {
                next: region,
                action: LineAction::Keep,
            },
        }
    }

    /// Whether a scan may end here without leaving a conflict open.
    pub fn is_terminal(self) -> bool {
        self == Region::Unconflicted
    }
}
