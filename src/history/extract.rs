use std::sync::LazyLock;

use regex::Regex;

use crate::error::{OpenPrError, Result};

/// Matches both "Merge pull request #N from ..." (GitHub) and
/// "Merged in ... (pull request #N)" (Bitbucket).
static PULL_REQUEST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"pull request #(\d+)").expect("marker pattern is valid"));

/// Extract the first pull request number mentioned in oneline merge logs.
///
/// Logs are ordered oldest first, so the earliest merge on the ancestry
/// path (the pull request that introduced the commit) wins.
pub fn extract_pull_request_number(commit_logs: &str) -> Result<u64> {
    PULL_REQUEST_MARKER
        .captures(commit_logs)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| OpenPrError::NoPullRequestNumber(commit_logs.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_first_match_wins() {
        let logs = "0000000 Merge pull request #123 from foo/master\n\
                    1111111 Merge pull request #456 from bar/master";
        assert_eq!(extract_pull_request_number(logs).unwrap(), 123);
    }

    #[test]
    fn test_bitbucket_first_match_wins() {
        let logs = "0000000 Merged in foo/master (pull request #123)\n\
                    1111111 Merged in bar/master (pull request #456)";
        assert_eq!(extract_pull_request_number(logs).unwrap(), 123);
    }

    #[test]
    fn test_skips_merges_without_marker() {
        let logs = "0000000 Merge branch 'release' into master\n\
                    1111111 Merge pull request #9 from acme/fix";
        assert_eq!(extract_pull_request_number(logs).unwrap(), 9);
    }

    #[test]
    fn test_no_marker() {
        let logs = "0000000 Merge branch 'feature'";
        let err = extract_pull_request_number(logs).unwrap_err();
        assert_eq!(err, OpenPrError::NoPullRequestNumber(logs.to_string()));
        assert!(err.to_string().starts_with("cannot detect pull request number from\n"));
    }

    #[test]
    fn test_empty_log() {
        assert!(extract_pull_request_number("").is_err());
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert!(extract_pull_request_number("0000000 Merge Pull Request #5").is_err());
    }
}
