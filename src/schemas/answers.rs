//! Answers collected from the interactive prompts

use serde::Serialize;

/// How the commit to move is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Reuse the commit currently at HEAD
    LastCommit,
    /// Stage chosen files and commit them first
    SelectFiles,
}

/// Methods in the order they are offered
pub const METHODS: &[Method] = &[Method::LastCommit, Method::SelectFiles];

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::LastCommit => write!(f, "Last commit"),
            Method::SelectFiles => write!(f, "Select files"),
        }
    }
}

/// Branch category, used as the branch-name prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchType {
    Feature,
    Fixes,
}

/// Branch types in the order they are offered
pub const BRANCH_TYPES: &[BranchType] = &[BranchType::Feature, BranchType::Fixes];

impl std::fmt::Display for BranchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BranchType::Feature => write!(f, "feature"),
            BranchType::Fixes => write!(f, "fixes"),
        }
    }
}

/// What to commit before the branch is cut, chosen once by [`Method`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum CommitPlan {
    /// The commit at HEAD is moved as is
    LastCommit,
    /// `files` are staged and committed with `message` first
    SelectFiles { files: Vec<String>, message: String },
}

impl CommitPlan {
    pub fn method(&self) -> Method {
        match self {
            CommitPlan::LastCommit => Method::LastCommit,
            CommitPlan::SelectFiles { .. } => Method::SelectFiles,
        }
    }
}

/// Everything the user answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub commit: CommitPlan,
    pub branch_type: BranchType,

    /// Branch name without the type prefix
    pub branch: String,
}

impl Answers {
    /// Full branch name, e.g. `fixes/my-fix`
    pub fn combined_branch(&self) -> String {
        format!("{}/{}", self.branch_type, self.branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_labels() {
        assert_eq!(Method::LastCommit.to_string(), "Last commit");
        assert_eq!(Method::SelectFiles.to_string(), "Select files");
        assert_eq!(METHODS, &[Method::LastCommit, Method::SelectFiles]);
    }

    #[test]
    fn test_combined_branch() {
        let answers = Answers {
            commit: CommitPlan::LastCommit,
            branch_type: BranchType::Fixes,
            branch: "my-fix".to_string(),
        };
        assert_eq!(answers.combined_branch(), "fixes/my-fix");
    }

    #[test]
    fn test_commit_plan_method() {
        assert_eq!(CommitPlan::LastCommit.method(), Method::LastCommit);
        let plan = CommitPlan::SelectFiles {
            files: vec!["a.rs".to_string()],
            message: "Add a".to_string(),
        };
        assert_eq!(plan.method(), Method::SelectFiles);
    }

    #[test]
    fn test_commit_plan_serialization() {
        let json = serde_json::to_string(&CommitPlan::LastCommit).unwrap();
        assert_eq!(json, r#"{"method":"last_commit"}"#);
    }
}
