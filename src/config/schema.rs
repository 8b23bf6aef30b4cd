use serde::{Deserialize, Serialize};

/// Remote used when neither the command line nor the config names one.
pub const DEFAULT_REMOTE: &str = "origin";

#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Remote that pull requests are created against
    pub remote: Option<String>,
    /// Branch that pull requests are merged into; detected from the remote HEAD if unset
    pub base_branch: Option<String>,
}

impl Config {
    /// Remote to use: the command-line value, then the config, then "origin"
    pub fn remote(&self, cli: Option<String>) -> String {
        cli.or_else(|| self.remote.clone())
            .unwrap_or_else(|| DEFAULT_REMOTE.to_string())
    }

    /// Base branch to use. An empty value on either level means "detect".
    pub fn base_branch(&self, cli: Option<String>) -> Option<String> {
        match cli {
            Some(branch) if branch.is_empty() => None,
            Some(branch) => Some(branch),
            None => self.base_branch.clone().filter(|b| !b.is_empty()),
        }
    }
}
