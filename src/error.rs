use thiserror::Error;

/// Failures that abort a pull request lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OpenPrError {
    /// The revision is not a lowercase hexadecimal commit id.
    #[error("invalid revision: {0}")]
    InvalidRevision(String),

    /// The remote URL does not look like `host/owner/repo`.
    #[error("cannot detect service and module from {0}")]
    UndetectedService(String),

    /// The remote host has no pull request URL template.
    #[error("service not supported: {0}")]
    UnsupportedService(String),

    #[error("{revision} is not merged to {tracking_branch} yet")]
    NotMerged {
        revision: String,
        tracking_branch: String,
    },

    /// Ancestry was confirmed but no merge commit mentions a pull request.
    #[error("cannot detect pull request number from\n{0}")]
    NoPullRequestNumber(String),

    /// A git invocation failed for any reason other than "not an ancestor".
    #[error("git {command} failed: {message}")]
    Git { command: String, message: String },
}

pub type Result<T> = std::result::Result<T, OpenPrError>;
