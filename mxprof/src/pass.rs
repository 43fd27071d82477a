//! The profile-annotation pass.
use log::{debug, info, warn};
use once_cell::sync::OnceCell;

use mxir::{Capabilities, ModulePass, Operation, PassError};

use crate::{
    error::AnnotateResult,
    profile::ProfileIndex,
};

/// Pass name reported in diagnostics and pipeline descriptions.
pub const PASS_NAME: &str = "annotate-operations-profile";

/// The dialect whose operations this pass annotates. Operations outside it
/// are never visited by the selection, whatever capabilities they declare.
pub const TARGET_DIALECT: &str = "mx";

/// Attaches profiling records to eligible operations of a program module.
///
/// An operation is eligible when its name is qualified with the
/// [`TARGET_DIALECT`] namespace and its capability set contains
/// [`Capabilities::PROFILE_ANNOTATABLE`]. Every eligible operation receives
/// exactly one record per invocation, the absent record when no sample
/// matches; ineligible operations are never mutated.
///
/// The pass owns one configuration value, the profile data path, fixed at
/// construction. An empty path means "no profiling data available" and is
/// not an error. The data source is loaded at most once per pass instance,
/// before the first operation of the first annotated module is visited, so a
/// broken source fails the whole invocation and leaves the tree untouched.
pub struct ProfileAnnotatePass {
    profile_data_path: String,
    index: OnceCell<ProfileIndex>,
}

impl ProfileAnnotatePass {
    pub fn new(profile_data_path: impl Into<String>) -> Self {
        ProfileAnnotatePass {
            profile_data_path: profile_data_path.into(),
            index: OnceCell::new(),
        }
    }

    /// The configured profile data path; empty when none was given.
    pub fn profile_data_path(&self) -> &str {
        &self.profile_data_path
    }

    fn resolve_index(&self) -> AnnotateResult<&ProfileIndex> {
        self.index.get_or_try_init(|| {
            if self.profile_data_path.is_empty() {
                debug!("no profile data path configured, annotating with absent records");
                Ok(ProfileIndex::empty())
            } else {
                ProfileIndex::load(&self.profile_data_path)
            }
        })
    }
}

impl ModulePass for ProfileAnnotatePass {
    fn name(&self) -> &'static str {
        PASS_NAME
    }

    fn run_on_module(&mut self, module: &mut Operation) -> Result<(), PassError> {
        // Resolving the index up front keeps the failure all-or-nothing: a
        // broken data source aborts before any attachment is written.
        let index = self.resolve_index().map_err(PassError::from)?;

        let mut annotated = 0usize;
        module.try_walk_mut(|op| {
            if op.name.dialect() != Some(TARGET_DIALECT) {
                return Ok(());
            }
            if !op.capabilities.contains(Capabilities::PROFILE_ANNOTATABLE) {
                return Ok(());
            }

            if op.location.is_unknown() {
                warn!(
                    "operation `{}` is annotatable but has no source location; \
                     only wildcard samples can match it",
                    op.name
                );
            }

            let record = index.lookup(op.name.as_str(), &op.location);
            debug!("attaching {} to `{}` at {}", record, op.name, op.location);
            op.attach_profile(record);
            annotated += 1;
            Ok::<(), PassError>(())
        })?;

        info!(
            "profile annotation attached {} records ({} loaded samples)",
            annotated,
            index.len()
        );
        Ok(())
    }
}

/// Factory handed to the host's pass manager: builds the annotation pass for
/// a given profile data path (possibly empty).
pub fn create_profile_annotate_pass(profile_data_path: impl Into<String>) -> Box<dyn ModulePass> {
    Box::new(ProfileAnnotatePass::new(profile_data_path))
}
