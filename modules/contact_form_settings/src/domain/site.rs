//! Current-site abstraction used for the subject-line default

/// Read access to the site the current request belongs to
///
/// This abstraction lets hosts plug in their own site registry; tests can
/// supply a fixed or switchable site.
pub trait SiteContext: Send + Sync {
    /// Display name of the current site
    fn current_site_name(&self) -> String;
}

/// Site context that always reports the same site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSite {
    name: String,
}

impl StaticSite {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl SiteContext for StaticSite {
    fn current_site_name(&self) -> String {
        self.name.clone()
    }
}
