//! Profile annotation for `mxir` operation trees.
//!
//! The pass walks a program module, selects every operation in the `mx`
//! dialect that declares the [`Capabilities::PROFILE_ANNOTATABLE`] capability,
//! resolves its identity (qualified name plus source location) against an
//! external profile data file, and attaches the resulting
//! [`ProfilingRecord`] to the operation. Downstream consumers (cost models,
//! schedulers, visualizers) read timing data straight off the IR instead of
//! keeping an out-of-band mapping.
//!
//! Absence of profiling data is not an error: a selected operation with no
//! matching sample receives the absent record `(0, 0)`. A data source that
//! cannot be read or parsed, by contrast, fails the whole invocation before
//! any operation is touched.
//!
//! [`Capabilities::PROFILE_ANNOTATABLE`]: mxir::Capabilities::PROFILE_ANNOTATABLE

pub mod error;
pub mod pass;
pub mod profile;

pub use error::{AnnotateError, AnnotateResult};
pub use mxir::ProfilingRecord;
pub use pass::{ProfileAnnotatePass, TARGET_DIALECT, create_profile_annotate_pass};
pub use profile::ProfileIndex;
