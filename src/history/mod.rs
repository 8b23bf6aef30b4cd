pub mod ancestry;
pub mod extract;
pub mod tracking;

pub use ancestry::{merge_history, Revision};
pub use extract::extract_pull_request_number;
pub use tracking::{resolve_tracking_branch, TrackingBranch};
