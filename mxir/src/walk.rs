//! Pre-order traversal over operation trees.
//!
//! The walk visits an operation before anything nested under it, and
//! siblings in their natural order (regions, then blocks, then operations,
//! each left to right). It is driven by an explicit work-list rather than
//! recursion, so arbitrarily deep trees cannot overflow the call stack.
use crate::op::Operation;

impl Operation {
    /// Visit this operation and every operation transitively nested under
    /// it, parent before children.
    pub fn walk(&self, mut f: impl FnMut(&Operation)) {
        let mut stack: Vec<&Operation> = vec![self];
        while let Some(op) = stack.pop() {
            f(op);
            // Children go on the stack reversed so the leftmost is popped first.
            stack.extend(
                op.regions
                    .iter()
                    .rev()
                    .flat_map(|region| region.blocks.iter().rev())
                    .flat_map(|block| block.operations.iter().rev()),
            );
        }
    }

    /// Mutable pre-order walk. The first callback error aborts the
    /// remaining traversal and is returned; operations not yet visited are
    /// left untouched.
    pub fn try_walk_mut<E>(
        &mut self,
        mut f: impl FnMut(&mut Operation) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut stack: Vec<&mut Operation> = vec![self];
        while let Some(op) = stack.pop() {
            f(&mut *op)?;
            stack.extend(
                op.regions
                    .iter_mut()
                    .rev()
                    .flat_map(|region| region.blocks.iter_mut().rev())
                    .flat_map(|block| block.operations.iter_mut().rev()),
            );
        }
        Ok(())
    }
}
