//! Change item lifecycle model.
//!
//! A stored change item always holds exactly one [`Status`]. Filters express
//! "any of these states" with a [`StatusSet`], replacing the bitmask field
//! that doubled as both value and filter in the legacy file-based tracker.

use std::fmt;

/// Lifecycle state of a change item.
///
/// The discriminants are the on-disk byte values. `Done` and `Cancelled` are
/// terminal: once a stored item reaches either, further writes to that id are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    /// Newly created, not yet reviewed
    Unreviewed = 1,
    /// Reviewed and accepted for work
    Reviewed = 2,
    /// Work in progress
    InProgress = 4,
    /// Completed (terminal)
    Done = 8,
    /// Abandoned (terminal)
    Cancelled = 16,
}

impl Status {
    /// The on-disk byte value for this status.
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Decode a status from its on-disk byte value.
    pub fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            1 => Some(Status::Unreviewed),
            2 => Some(Status::Reviewed),
            4 => Some(Status::InProgress),
            8 => Some(Status::Done),
            16 => Some(Status::Cancelled),
            _ => None,
        }
    }

    /// Check if this status forbids further edits.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Done | Status::Cancelled)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Unreviewed => "unreviewed",
            Status::Reviewed => "reviewed",
            Status::InProgress => "in progress",
            Status::Done => "done",
            Status::Cancelled => "cancelled",
        };
        write!(f, "{}", name)
    }
}

/// A set of acceptable statuses, used only in filters.
///
/// A filter carrying a `StatusSet` matches a record whose status is any
/// member of the set. An empty set matches nothing; omit the status field
/// from the filter entirely (leave it `None`) to match any status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSet(u8);

impl StatusSet {
    /// The empty set. Matches no record.
    pub const EMPTY: StatusSet = StatusSet(0);

    /// Every status.
    pub const ALL: StatusSet = StatusSet(1 | 2 | 4 | 8 | 16);

    /// The non-terminal states: unreviewed, reviewed, in progress.
    ///
    /// This is the set report flows use to ask for "anything still open".
    pub const ACTIVE: StatusSet = StatusSet(1 | 2 | 4);

    /// A set containing a single status.
    pub const fn of(status: Status) -> StatusSet {
        StatusSet(status.bit())
    }

    /// This set with one more status added.
    pub const fn with(self, status: Status) -> StatusSet {
        StatusSet(self.0 | status.bit())
    }

    /// Check membership.
    pub const fn contains(self, status: Status) -> bool {
        self.0 & status.bit() != 0
    }

    /// Check if the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Ordinal priority of a change item, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Priority {
    /// Lowest priority
    Lowest = 0,
    /// Low priority
    Low = 1,
    /// Medium priority
    Medium = 2,
    /// High priority
    High = 3,
    /// Highest priority
    Highest = 4,
}

impl Priority {
    /// The on-disk ordinal for this priority.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Decode a priority from its on-disk ordinal.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Priority::Lowest),
            1 => Some(Priority::Low),
            2 => Some(Priority::Medium),
            3 => Some(Priority::High),
            4 => Some(Priority::Highest),
            _ => None,
        }
    }
}
