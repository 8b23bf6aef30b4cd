//! Find the pull request that merged a commit, using only local git history.
//!
//! The merge commits on the ancestry path between a revision and its
//! tracking branch are scanned for a "pull request #N" marker, and the
//! remote URL decides which hosting service the link points at.

pub mod browser;
pub mod config;
pub mod error;
pub mod git;
pub mod history;
pub mod lookup;
pub mod output;
pub mod service;

pub use error::OpenPrError;
pub use lookup::{find_pull_request, Lookup, PullRequestLink};
