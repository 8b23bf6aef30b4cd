use std::fmt;

/// Hosting services whose pull request pages can be linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    GitHub,
    Bitbucket,
}

impl Service {
    /// Every supported service, in lookup order.
    pub const ALL: [Service; 2] = [Service::GitHub, Service::Bitbucket];

    /// Look up the service hosted at `host` (e.g. "github.com")
    pub fn from_host(host: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.host() == host)
    }

    pub fn host(self) -> &'static str {
        match self {
            Service::GitHub => "github.com",
            Service::Bitbucket => "bitbucket.org",
        }
    }

    fn template(self) -> &'static str {
        match self {
            Service::GitHub => "https://github.com/{module}/pull/{number}",
            Service::Bitbucket => "https://bitbucket.org/{module}/pull-requests/{number}",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host())
    }
}

/// Build the pull request page URL for `module` ("owner/repo") on `service`
pub fn pull_request_url(service: Service, module: &str, number: u64) -> String {
    service
        .template()
        .replace("{module}", module)
        .replace("{number}", &number.to_string())
}
