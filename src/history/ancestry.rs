use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::tracking::TrackingBranch;
use crate::error::{OpenPrError, Result};
use crate::git::{AncestorCheck, VcsQuery};

static COMMIT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]+$").expect("commit id pattern is valid"));

/// A (possibly abbreviated) lowercase hexadecimal commit id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision(String);

impl Revision {
    pub fn parse(revision: &str) -> Result<Self> {
        if COMMIT_ID.is_match(revision) {
            Ok(Self(revision.to_string()))
        } else {
            Err(OpenPrError::InvalidRevision(revision.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Merge commits that brought `revision` into `branch`, oldest first.
///
/// # Errors
/// - [`OpenPrError::NotMerged`] if `revision` is not an ancestor of `branch`
/// - [`OpenPrError::Git`] for any other git failure (unknown refs included)
pub fn merge_history(
    vcs: &impl VcsQuery,
    revision: &Revision,
    branch: &TrackingBranch,
) -> Result<String> {
    match vcs.is_ancestor(revision.as_str(), branch.as_str())? {
        AncestorCheck::Ancestor => {}
        AncestorCheck::NotAncestor => {
            return Err(OpenPrError::NotMerged {
                revision: revision.to_string(),
                tracking_branch: branch.to_string(),
            });
        }
    }

    vcs.merge_log_ancestry_path(revision.as_str(), branch.as_str())
}
