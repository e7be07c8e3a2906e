//! Runtime information
//!
//! Identifies the running tool in the user agent sent with every request.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeInformation {
    pub product: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub os_name: String,
    #[serde(default)]
    pub os_version: String,
}

impl RuntimeInformation {
    pub fn new(product: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            version: version.into(),
            runtime: String::new(),
            os_name: String::new(),
            os_version: String::new(),
        }
    }

    /// Information about this build of the crate and the host it runs on.
    pub fn current() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
            .with_runtime(format!("Rust; {}", std::env::consts::ARCH))
            .with_os(std::env::consts::OS, "")
    }

    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    pub fn with_os(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.os_name = name.into();
        self.os_version = version.into();
        self
    }

    /// `product/version (runtime; os os-version)`; the `/version` part is
    /// omitted when the version is unknown.
    pub fn user_agent(&self) -> String {
        let version = if self.version.is_empty() {
            String::new()
        } else {
            format!("/{}", self.version)
        };
        let os = [self.os_name.as_str(), self.os_version.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        format!("{}{} ({}; {})", self.product, version, self.runtime, os)
    }
}

impl Default for RuntimeInformation {
    fn default() -> Self {
        Self::current()
    }
}
