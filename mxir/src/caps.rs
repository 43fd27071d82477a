//! Capability flags declared by operation definitions.
//!
//! Capabilities are cross-cutting behaviors an operation opts into,
//! independent of its dialect. Passes query the set instead of matching on
//! concrete operation names.
use bitflags::bitflags;

bitflags! {
    /// Set of cross-cutting capabilities an operation declares.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Capabilities: u32 {
        /// The operation accepts an out-of-band profiling attachment.
        const PROFILE_ANNOTATABLE = 1 << 0;
        /// The operation has no side effects and may be freely duplicated
        /// or removed.
        const PURE = 1 << 1;
        /// The operation ends its enclosing block.
        const TERMINATOR = 1 << 2;
    }
}
