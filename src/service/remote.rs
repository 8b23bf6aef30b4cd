//! Remote URL parsing.
//!
//! Turns a git remote URL into the hosting service and `owner/repo` module
//! it points at. HTTPS (`https://github.com/owner/repo.git`), SCP-like
//! (`git@github.com:owner/repo.git`) and user-qualified
//! (`https://user@bitbucket.org/owner/repo`) forms are accepted, each with
//! or without the `.git` suffix and a trailing slash.

use std::sync::LazyLock;

use regex::Regex;

use super::template::{pull_request_url, Service};
use crate::error::{OpenPrError, Result};

/// Remote URL shapes, tried in order. The first structural match wins.
///
/// Each pattern captures the host (exactly one dot, right after the last
/// `/` or `@`) and the two-segment module path.
static REMOTE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^.+[/@]([^.]+\.[^.]+)[:/]([^/]+/[^/]+)\.git/?$",
        r"^.+[/@]([^.]+\.[^.]+)[:/]([^/]+/[^/]+)/?$",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("remote URL pattern is valid"))
    .collect()
});

/// Hosting service and repository path of a remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceModule {
    pub service: Service,
    /// "owner/repo"
    pub module: String,
}

impl ServiceModule {
    /// Link to pull request `number` of this repository
    pub fn pull_request_url(&self, number: u64) -> String {
        pull_request_url(self.service, &self.module, number)
    }
}

/// Extract the service and module from a remote URL
///
/// # Errors
/// - [`OpenPrError::UndetectedService`] if no URL shape matches
/// - [`OpenPrError::UnsupportedService`] if the host is not a known service
pub fn parse_remote_url(url: &str) -> Result<ServiceModule> {
    let url = url.trim();
    let (host, module) = REMOTE_PATTERNS
        .iter()
        .find_map(|re| {
            re.captures(url)
                .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        })
        .ok_or_else(|| OpenPrError::UndetectedService(url.to_string()))?;

    let service = Service::from_host(&host).ok_or(OpenPrError::UnsupportedService(host))?;
    log::debug!("Remote {} is {} module {}", url, service, module);

    Ok(ServiceModule { service, module })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::https("https://github.com/acme/widget.git")]
    #[case::https_no_suffix("https://github.com/acme/widget")]
    #[case::https_trailing_slash("https://github.com/acme/widget/")]
    #[case::https_suffix_and_slash("https://github.com/acme/widget.git/")]
    #[case::scp("git@github.com:acme/widget.git")]
    #[case::scp_no_suffix("git@github.com:acme/widget")]
    #[case::scp_trailing_slash("git@github.com:acme/widget/")]
    #[case::ssh_scheme("ssh://git@github.com/acme/widget.git")]
    #[case::http("http://github.com/acme/widget")]
    #[case::surrounding_whitespace("  git@github.com:acme/widget.git\n")]
    fn test_github_forms(#[case] url: &str) {
        let parsed = parse_remote_url(url).unwrap();
        assert_eq!(
            parsed,
            ServiceModule {
                service: Service::GitHub,
                module: "acme/widget".to_string(),
            }
        );
    }

    #[rstest]
    #[case::https_with_user("https://yoichi22@bitbucket.org/yoichi22/sandbox.git")]
    #[case::scp("git@bitbucket.org:yoichi22/sandbox.git")]
    #[case::https_no_suffix("https://bitbucket.org/yoichi22/sandbox")]
    fn test_bitbucket_forms(#[case] url: &str) {
        let parsed = parse_remote_url(url).unwrap();
        assert_eq!(parsed.service, Service::Bitbucket);
        assert_eq!(parsed.module, "yoichi22/sandbox");
    }

    #[test]
    fn test_unsupported_host() {
        let err = parse_remote_url("git@gitlab.com:acme/widget.git").unwrap_err();
        assert_eq!(err, OpenPrError::UnsupportedService("gitlab.com".to_string()));
        assert_eq!(err.to_string(), "service not supported: gitlab.com");
    }

    #[rstest]
    #[case::bare_word("widget")]
    #[case::local_path("/srv/git/widget.git")]
    #[case::no_owner("https://github.com/widget.git")]
    #[case::host_without_dot("git@localhost:acme/widget.git")]
    #[case::empty("")]
    fn test_undetectable(#[case] url: &str) {
        let err = parse_remote_url(url).unwrap_err();
        assert!(matches!(err, OpenPrError::UndetectedService(_)), "{url}: {err:?}");
        assert!(err.to_string().starts_with("cannot detect service and module from"));
    }

    #[test]
    fn test_multi_dot_host_is_undetectable() {
        // Only single-dot hosts are recognised
        let err = parse_remote_url("https://gitlab.example.com/acme/widget.git").unwrap_err();
        assert!(matches!(err, OpenPrError::UndetectedService(_)));
    }

    #[test]
    fn test_nested_group_is_rejected() {
        // The host capture swallows the first path segment, so the host check fails
        let err = parse_remote_url("https://github.com/acme/tools/widget.git").unwrap_err();
        assert_eq!(
            err,
            OpenPrError::UnsupportedService("github.com/acme".to_string())
        );
    }

    #[test]
    fn test_pull_request_url() {
        let parsed = parse_remote_url("git@bitbucket.org:acme/widget.git").unwrap();
        assert_eq!(
            parsed.pull_request_url(7),
            "https://bitbucket.org/acme/widget/pull-requests/7"
        );
    }
}
