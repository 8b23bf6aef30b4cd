use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use super::{AncestorCheck, VcsQuery};
use crate::error::{OpenPrError, Result};

/// `git merge-base --is-ancestor` exit status for "not an ancestor".
const NOT_ANCESTOR_STATUS: i32 = 1;

/// [`VcsQuery`] backed by the `git` command line, run inside a repository
/// directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    path: PathBuf,
}

impl GitCli {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository containing the current working directory
    pub fn current() -> Self {
        Self::new(".")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run git and hand back the raw output, whatever its exit status.
    fn output(&self, args: &[&str]) -> Result<Output> {
        log::debug!("$ git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .map_err(|e| OpenPrError::Git {
                command: args.join(" "),
                message: e.to_string(),
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.trim().lines() {
            log::debug!("  ! {}", line);
        }
        Ok(output)
    }

    /// Run git and return its stdout, failing on a non-zero exit status.
    fn run_command(&self, args: &[&str]) -> Result<String> {
        let output = self.output(args)?;

        if !output.status.success() {
            return Err(failure(args, &output));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        for line in stdout.trim().lines() {
            log::debug!("  {}", line);
        }
        Ok(stdout)
    }
}

fn failure(args: &[&str], output: &Output) -> OpenPrError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let message = match stderr.trim() {
        "" => output.status.to_string(),
        msg => msg.to_string(),
    };
    OpenPrError::Git {
        command: args.join(" "),
        message,
    }
}

impl VcsQuery for GitCli {
    fn remote_url(&self, remote: &str) -> Result<String> {
        let key = format!("remote.{}.url", remote);
        self.run_command(&["config", &key])
            .map(|url| url.trim().to_string())
    }

    fn is_ancestor(&self, revision: &str, branch: &str) -> Result<AncestorCheck> {
        let args = ["merge-base", "--is-ancestor", revision, branch];
        let output = self.output(&args)?;

        match output.status.code() {
            Some(0) => Ok(AncestorCheck::Ancestor),
            Some(NOT_ANCESTOR_STATUS) => Ok(AncestorCheck::NotAncestor),
            _ => Err(failure(&args, &output)),
        }
    }

    fn merge_log_ancestry_path(&self, revision: &str, branch: &str) -> Result<String> {
        let range = format!("{}...{}", revision, branch);
        self.run_command(&[
            "log",
            "--merges",
            "--oneline",
            "--reverse",
            "--ancestry-path",
            &range,
        ])
    }

    fn default_branch_ref(&self, remote: &str) -> Result<String> {
        let head = format!("remotes/{}/HEAD", remote);
        self.run_command(&["rev-parse", "--abbrev-ref", &head])
            .map(|name| name.trim().to_string())
    }
}
