use std::fmt;

/// Whether a candidate is a legitimate next release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceStatus {
    /// Candidate unparseable or no tags to compare against
    Unknown,
    /// Candidate is not above every tag sharing its minor line
    Invalid,
    /// Candidate targets an older minor line while on the release branch
    Caution,
    Ok,
}

/// Whether a candidate collides with an existing tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictStatus {
    Unknown,
    Conflict,
    NoConflict,
}

/// Outcome of checking one candidate version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceVerdict {
    pub sequence: SequenceStatus,
    pub conflict: ConflictStatus,
}

impl SequenceVerdict {
    /// Verdict when nothing could be compared
    pub fn unknown() -> Self {
        SequenceVerdict {
            sequence: SequenceStatus::Unknown,
            conflict: ConflictStatus::Unknown,
        }
    }
}

impl fmt::Display for SequenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SequenceStatus::Unknown => "unknown",
            SequenceStatus::Invalid => "invalid",
            SequenceStatus::Caution => "caution",
            SequenceStatus::Ok => "ok",
        };
        f.write_str(label)
    }
}

impl fmt::Display for ConflictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConflictStatus::Unknown => "unknown",
            ConflictStatus::Conflict => "conflict",
            ConflictStatus::NoConflict => "no conflict",
        };
        f.write_str(label)
    }
}
