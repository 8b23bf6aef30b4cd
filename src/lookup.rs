use crate::error::Result;
use crate::git::VcsQuery;
use crate::history::{extract_pull_request_number, merge_history, resolve_tracking_branch, Revision};
use crate::service::parse_remote_url;

/// What to look up: the commit, and where its pull request was merged.
#[derive(Debug, Clone)]
pub struct Lookup {
    pub revision: String,
    pub remote: String,
    /// Branch on `remote` that pull requests merge into; detected when `None`.
    pub base_branch: Option<String>,
}

/// A pull request found for a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLink {
    pub number: u64,
    pub url: String,
}

/// Find the pull request that merged `lookup.revision` and build its URL.
///
/// Reads only local repository state. Any failing step aborts the lookup.
pub fn find_pull_request(vcs: &impl VcsQuery, lookup: &Lookup) -> Result<PullRequestLink> {
    let revision = Revision::parse(&lookup.revision)?;

    let tracking_branch =
        resolve_tracking_branch(vcs, &lookup.remote, lookup.base_branch.as_deref());
    log::debug!("Tracking branch: {}", tracking_branch);

    let logs = merge_history(vcs, &revision, &tracking_branch)?;
    let number = extract_pull_request_number(&logs)?;
    log::debug!("Pull request number: {}", number);

    let remote_url = vcs.remote_url(&lookup.remote)?;
    let service_module = parse_remote_url(&remote_url)?;
    let url = service_module.pull_request_url(number);
    log::debug!("Pull request URL: {}", url);

    Ok(PullRequestLink { number, url })
}
