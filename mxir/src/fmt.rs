//! Pretty-print helpers for names, locations, records, and operation trees.
use crate::{
    attach::{Attachment, ProfilingRecord},
    name::OpName,
    location::Location,
    op::Operation,
};

impl std::fmt::Display for OpName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::File { file, line, col } => write!(f, "{}:{}:{}", file, line, col),
            Location::Unknown => write!(f, "?"),
        }
    }
}

impl std::fmt::Display for ProfilingRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_absent() {
            write!(f, "profile<absent>")
        } else {
            write!(f, "profile<ts={}, dur={}>", self.timestamp, self.duration)
        }
    }
}

impl std::fmt::Display for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attachment::Profile(record) => write!(f, "{}", record),
            Attachment::Text(text) => write!(f, "{:?}", text),
            Attachment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl Operation {
    /// Build a formatting helper that renders the whole tree, one operation
    /// per line, nesting shown by indentation.
    pub fn dump(&self) -> impl std::fmt::Display + '_ {
        pub struct Dump<'a>(&'a Operation);

        impl std::fmt::Display for Dump<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                // Work-list of (operation, depth); children pushed reversed
                // so the output order matches the walk order.
                let mut stack: Vec<(&Operation, usize)> = vec![(self.0, 0)];
                while let Some((op, depth)) = stack.pop() {
                    write!(f, "{:indent$}{} @ {}", "", op.name, op.location, indent = depth * 2)?;
                    for (key, attachment) in &op.attachments {
                        write!(f, " [{}: {}]", key, attachment)?;
                    }
                    writeln!(f)?;
                    stack.extend(
                        op.regions
                            .iter()
                            .rev()
                            .flat_map(|region| region.blocks.iter().rev())
                            .flat_map(|block| block.operations.iter().rev())
                            .map(|child| (child, depth + 1)),
                    );
                }
                Ok(())
            }
        }

        Dump(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Location, Operation, ProfilingRecord, Region};

    #[test]
    fn dump_renders_nesting_and_attachments() {
        let mut inner = Operation::new("mx.matmul", Location::file("gemm.mx", 10, 3));
        inner.attach_profile(ProfilingRecord::new(100, 5));

        let mut body = Operation::new("mx.func", Location::Unknown).with_region(Region::default());
        body.push_op(inner);

        let mut module = Operation::module(Location::Unknown);
        module.push_op(body);

        let rendered = module.dump().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "core.module @ ?");
        assert_eq!(lines[1], "  mx.func @ ?");
        assert_eq!(
            lines[2],
            "    mx.matmul @ gemm.mx:10:3 [profile: profile<ts=100, dur=5>]"
        );
    }
}
