//! Out-of-band attachments.
//!
//! An attachment is metadata associated with an operation without being part
//! of its semantic definition: later passes may read it, but removing every
//! attachment leaves a valid program. Attachments are keyed by name on the
//! operation; the profiling pass uses the reserved key
//! [`PROFILE_KEY`](crate::op::PROFILE_KEY).
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::EnumIs;

/// One measured execution sample for an operation.
///
/// Both fields share an external time unit (the producer of the profile data
/// decides; this crate never interprets the values). A record with both
/// fields at zero is the defined "absent" value: the operation was selected
/// for annotation but no sample matched it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProfilingRecord {
    /// Time at which the sample was taken.
    pub timestamp: u64,
    /// Elapsed time for one execution of the operation.
    pub duration: u64,
}

impl ProfilingRecord {
    /// The "no matching sample" value.
    pub const ABSENT: ProfilingRecord = ProfilingRecord {
        timestamp: 0,
        duration: 0,
    };

    pub fn new(timestamp: u64, duration: u64) -> Self {
        ProfilingRecord {
            timestamp,
            duration,
        }
    }

    /// True if this record carries no sample data.
    pub fn is_absent(&self) -> bool {
        *self == ProfilingRecord::ABSENT
    }
}

/// Attachment payloads understood by the IR.
#[derive(Clone, Debug, PartialEq, Eq, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Attachment {
    /// A profiling sample written by the profile-annotation pass.
    Profile(ProfilingRecord),
    /// Free-form textual metadata.
    Text(String),
    /// A plain numeric tag.
    Index(u64),
}
