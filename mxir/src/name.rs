//! Qualified operation names.
//!
//! Every operation carries a dialect-qualified name such as `mx.matmul`:
//! the text before the first `.` is the dialect namespace, the remainder is
//! the operation's short name within that dialect. A name without a `.` has
//! no dialect and belongs to no namespace.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A dialect-qualified operation name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpName(Box<str>);

impl OpName {
    pub fn new(name: impl Into<String>) -> Self {
        OpName(name.into().into_boxed_str())
    }

    /// The full qualified name, e.g. `mx.matmul`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The dialect namespace, or `None` for an unqualified name.
    pub fn dialect(&self) -> Option<&str> {
        self.0.split_once('.').map(|(dialect, _)| dialect)
    }

    /// The name within its dialect (`matmul` for `mx.matmul`). For an
    /// unqualified name this is the whole name.
    pub fn short(&self) -> &str {
        self.0.split_once('.').map_or(&*self.0, |(_, short)| short)
    }
}

impl From<&str> for OpName {
    fn from(s: &str) -> Self {
        OpName::new(s)
    }
}

impl From<String> for OpName {
    fn from(s: String) -> Self {
        OpName::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_splits_into_dialect_and_short() {
        let name = OpName::from("mx.matmul");
        assert_eq!(name.dialect(), Some("mx"));
        assert_eq!(name.short(), "matmul");
        assert_eq!(name.as_str(), "mx.matmul");
    }

    #[test]
    fn unqualified_name_has_no_dialect() {
        let name = OpName::from("barrier");
        assert_eq!(name.dialect(), None);
        assert_eq!(name.short(), "barrier");
    }

    #[test]
    fn only_first_dot_separates_the_dialect() {
        let name = OpName::from("mx.reduce.sum");
        assert_eq!(name.dialect(), Some("mx"));
        assert_eq!(name.short(), "reduce.sum");
    }
}
