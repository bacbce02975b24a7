/*
[INPUT]:  none
[OUTPUT]: Lane enum with one-directional lifecycle transitions
[POS]:    Task domain logic - state machine for the board lifecycle
[UPDATE]: When lane semantics or transitions change
*/

use std::fmt;

/// The three lanes a task moves through.
///
/// Transitions are one-directional: Pending -> InProgress -> Completed.
/// There is no back-edge and no skip from Pending straight to
/// Completed; tasks leave Completed only by being cleared off the
/// board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Pending,
    InProgress,
    Completed,
}

impl Lane {
    /// The lane a task advances into, if any.
    pub fn successor(self) -> Option<Lane> {
        match self {
            Lane::Pending => Some(Lane::InProgress),
            Lane::InProgress => Some(Lane::Completed),
            Lane::Completed => None,
        }
    }

    /// Whether a task may advance from `self` into `to`.
    pub fn can_advance(self, to: Lane) -> bool {
        self.successor() == Some(to)
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Lane::Pending => "pending",
            Lane::InProgress => "in progress",
            Lane::Completed => "completed",
        };
        f.write_str(name)
    }
}
