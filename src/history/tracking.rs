use std::fmt;

use crate::git::VcsQuery;

/// Branch used when the remote's default branch cannot be determined.
pub const FALLBACK_BRANCH: &str = "master";

/// Remote-qualified branch ("origin/main") that merges are checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingBranch(String);

impl TrackingBranch {
    pub fn new(remote: &str, branch: &str) -> Self {
        Self(format!("{}/{}", remote, branch))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pick the branch `revision` should have been merged to.
///
/// An explicit `branch` is used as given, without checking it exists.
/// Otherwise the remote's cached `HEAD` decides, falling back to
/// `{remote}/master` when it is missing or unresolvable.
pub fn resolve_tracking_branch(
    vcs: &impl VcsQuery,
    remote: &str,
    branch: Option<&str>,
) -> TrackingBranch {
    if let Some(branch) = branch.filter(|b| !b.is_empty()) {
        return TrackingBranch::new(remote, branch);
    }

    let placeholder = format!("remotes/{}/HEAD", remote);
    match vcs.default_branch_ref(remote) {
        Ok(name) if !name.is_empty() && name != placeholder => TrackingBranch(name),
        Ok(_) => {
            log::debug!("{} is not set, using {}", placeholder, FALLBACK_BRANCH);
            TrackingBranch::new(remote, FALLBACK_BRANCH)
        }
        Err(e) => {
            log::debug!("Cannot resolve {}: {}", placeholder, e);
            TrackingBranch::new(remote, FALLBACK_BRANCH)
        }
    }
}
