//! Domain logic - pure versioning rules independent of files and git

pub mod commit;
pub mod trigger;
pub mod version;

pub use commit::CommitType;
pub use trigger::CommitTrigger;
pub use version::{validate_version_string, Version};
