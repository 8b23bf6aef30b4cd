pub mod remote;
pub mod template;

pub use remote::{parse_remote_url, ServiceModule};
pub use template::{pull_request_url, Service};
