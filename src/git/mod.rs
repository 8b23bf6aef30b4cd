//! Version-control queries.
//!
//! Everything the lookup needs from git goes through [`VcsQuery`], so the
//! pipeline can run against [`GitCli`] or a fake returning canned output.

mod cli;

pub use cli::GitCli;

use crate::error::Result;

/// Outcome of an ancestor check that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AncestorCheck {
    Ancestor,
    NotAncestor,
}

pub trait VcsQuery {
    /// Configured URL of `remote`
    fn remote_url(&self, remote: &str) -> Result<String>;

    /// Whether `revision` is reachable from `branch`.
    ///
    /// Unknown refs are errors, not [`AncestorCheck::NotAncestor`].
    fn is_ancestor(&self, revision: &str, branch: &str) -> Result<AncestorCheck>;

    /// One-line summaries of the merge commits on the ancestry path between
    /// `revision` and `branch`, oldest first
    fn merge_log_ancestry_path(&self, revision: &str, branch: &str) -> Result<String>;

    /// Abbreviated name `remotes/{remote}/HEAD` resolves to (e.g. "origin/main").
    ///
    /// When the symbolic ref is not cached locally git echoes the ref name back.
    fn default_branch_ref(&self, remote: &str) -> Result<String>;
}
