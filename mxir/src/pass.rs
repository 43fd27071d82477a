//! Module-pass abstraction.
//!
//! A pass is constructed once, handed to the host's pass manager as a
//! `Box<dyn ModulePass>`, and invoked once per program module. Passes report
//! failure through [`PassError`], which wraps the pass's own error type; a
//! failed pass aborts the pipeline for that module.
use thiserror::Error;

use crate::op::Operation;

/// A transformation or analysis run over one program module at a time.
pub trait ModulePass {
    /// Stable pass name used in diagnostics and pipeline descriptions.
    fn name(&self) -> &'static str;

    /// Run the pass over the module rooted at `module`.
    fn run_on_module(&mut self, module: &mut Operation) -> Result<(), PassError>;
}

/// Failure of a single pass invocation, carrying the pass name.
#[derive(Debug, Error)]
#[error("pass `{pass}` failed: {source}")]
pub struct PassError {
    pub pass: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl PassError {
    pub fn new(
        pass: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        PassError {
            pass: pass.into(),
            source: source.into(),
        }
    }
}
