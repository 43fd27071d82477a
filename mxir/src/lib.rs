pub mod attach;
pub mod caps;
pub mod fmt;
pub mod location;
pub mod name;
pub mod op;
pub mod pass;
pub mod walk;

pub use attach::{Attachment, ProfilingRecord};
pub use caps::Capabilities;
pub use location::Location;
pub use name::OpName;
pub use op::{Block, Operation, Region};
pub use pass::{ModulePass, PassError};
