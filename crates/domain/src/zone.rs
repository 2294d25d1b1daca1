use std::fmt;

/// Zone used when none is configured.
pub const FALLBACK_ZONE: &str = "local.";

/// Zone suffix appended to short hostnames, always ending with a dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone(String);

impl Zone {
    /// An empty `configured` value falls back to [`FALLBACK_ZONE`].
    pub fn new(configured: &str) -> Self {
        if configured.is_empty() {
            return Self(FALLBACK_ZONE.to_string());
        }

        if configured.ends_with('.') {
            Self(configured.to_string())
        } else {
            Self(format!("{}.", configured))
        }
    }

    pub fn from_option(configured: Option<&str>) -> Self {
        Self::new(configured.unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn fqdn(&self, hostname: &str) -> String {
        format!("{}.{}", hostname, self.0)
    }
}

impl Default for Zone {
    fn default() -> Self {
        Self(FALLBACK_ZONE.to_string())
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
