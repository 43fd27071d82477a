//! Operations, regions and blocks.
//!
//! The IR is a tree: an operation owns zero or more regions, a region owns a
//! list of blocks, and a block owns a list of operations. A whole program
//! module is itself an operation (`core.module` by convention) with a single
//! region, so every structural query works uniformly from the root down.
//!
//! Operations are plain data with public fields, constructed directly or via
//! the `with_*` builder helpers. The tree never shares nodes; ownership
//! follows the nesting.
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    attach::{Attachment, ProfilingRecord},
    caps::Capabilities,
    location::Location,
    name::OpName,
};

/// Attachment key reserved for profiling records.
pub const PROFILE_KEY: &str = "profile";

/// A single operation in the program tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Operation {
    /// Dialect-qualified name, e.g. `mx.matmul`.
    pub name: OpName,

    /// Source site this operation was produced from, if preserved.
    pub location: Location,

    /// Capabilities the operation's definition declares.
    pub capabilities: Capabilities,

    /// Nested regions. Most operations have none (leaves); structured
    /// operations such as loops or modules have one or more.
    pub regions: SmallVec<Region, 1>,

    /// Out-of-band metadata keyed by attachment name.
    pub attachments: BTreeMap<String, Attachment>,
}

/// A region: an ordered list of blocks nested under an operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    pub blocks: Vec<Block>,
}

/// A block: an ordered list of operations within a region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Block {
    pub operations: Vec<Operation>,
}

impl Operation {
    pub fn new(name: impl Into<OpName>, location: Location) -> Self {
        Operation {
            name: name.into(),
            location,
            capabilities: Capabilities::empty(),
            regions: SmallVec::new(),
            attachments: BTreeMap::new(),
        }
    }

    /// Conventional program-module root: a `core.module` operation with one
    /// empty region.
    pub fn module(location: Location) -> Self {
        Operation::new("core.module", location).with_region(Region::default())
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    /// Append an operation to the last block of the first region, creating
    /// the block if the region is empty. Convenience for building flat
    /// module bodies; panics if the operation has no region.
    pub fn push_op(&mut self, op: Operation) {
        let region = self
            .regions
            .first_mut()
            .expect("push_op requires an operation with at least one region");
        if region.blocks.is_empty() {
            region.blocks.push(Block::default());
        }
        let block = region.blocks.last_mut().expect("block just ensured");
        block.operations.push(op);
    }

    /// Write or replace an attachment under `key`.
    pub fn attach(&mut self, key: impl Into<String>, attachment: Attachment) {
        self.attachments.insert(key.into(), attachment);
    }

    pub fn attachment(&self, key: &str) -> Option<&Attachment> {
        self.attachments.get(key)
    }

    /// Write or replace the profiling record attachment.
    pub fn attach_profile(&mut self, record: ProfilingRecord) {
        self.attach(PROFILE_KEY, Attachment::Profile(record));
    }

    /// The profiling record attached by the annotation pass, if any.
    pub fn profile(&self) -> Option<ProfilingRecord> {
        match self.attachments.get(PROFILE_KEY) {
            Some(Attachment::Profile(record)) => Some(*record),
            _ => None,
        }
    }

    /// Number of operations transitively nested under this one, excluding
    /// this operation itself.
    pub fn nested_count(&self) -> usize {
        let mut count = 0;
        self.walk(|_| count += 1);
        count - 1
    }

    /// Iterate over the operations of every block of every region, in tree
    /// order. Direct children only.
    pub fn children(&self) -> impl Iterator<Item = &Operation> {
        self.regions
            .iter()
            .flat_map(|region| region.blocks.iter())
            .flat_map(|block| block.operations.iter())
    }
}

impl Drop for Operation {
    fn drop(&mut self) {
        // Flatten nested regions first: the derived drop glue recurses per
        // nesting level and would overflow the call stack on deep trees.
        let mut pending: Vec<Region> = std::mem::take(&mut self.regions).into_iter().collect();
        while let Some(mut region) = pending.pop() {
            for block in &mut region.blocks {
                for op in &mut block.operations {
                    pending.extend(std::mem::take(&mut op.regions));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_op_creates_the_first_block_on_demand() {
        let mut module = Operation::module(Location::Unknown);
        module.push_op(Operation::new("mx.add", Location::Unknown));
        module.push_op(Operation::new("mx.mul", Location::Unknown));

        assert_eq!(module.regions[0].blocks.len(), 1);
        assert_eq!(module.children().count(), 2);
        assert_eq!(module.nested_count(), 2);
    }

    #[test]
    fn reattaching_under_the_same_key_replaces() {
        let mut op = Operation::new("mx.add", Location::Unknown);
        op.attach_profile(ProfilingRecord::new(1, 2));
        op.attach_profile(ProfilingRecord::new(3, 4));

        assert_eq!(op.profile(), Some(ProfilingRecord::new(3, 4)));
        assert_eq!(op.attachments.len(), 1);
    }

    #[test]
    fn profile_accessor_ignores_foreign_attachments() {
        let mut op = Operation::new("mx.add", Location::Unknown);
        op.attach("note", Attachment::Text("hot loop".into()));
        assert_eq!(op.profile(), None);
    }
}
