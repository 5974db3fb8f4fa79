//! Schema types for cherrypr

mod answers;
mod config;
mod status;

pub use answers::{Answers, BranchType, CommitPlan, Method, BRANCH_TYPES, METHODS};
pub use config::Config;
pub use status::StatusEntry;
