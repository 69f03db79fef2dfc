//! System probe port for dependency detection.
//!
//! This port abstracts active system probing (command execution, pkg-config
//! queries) from the core domain. The implementation lives in
//! `clubkit-runtime`; the CLI injects it at the composition root.

/// Installation status of a single dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    /// Installed, with the detected version string.
    Present { version: String },
    /// Not found on this system.
    Missing,
}

/// A system dependency the bot deployment needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Short name (the command or library).
    pub name: &'static str,
    /// What the dependency is for.
    pub description: &'static str,
    /// Whether the bot cannot run without it.
    pub required: bool,
    /// Detected status.
    pub status: DependencyStatus,
}

impl Dependency {
    /// A required dependency, initially marked missing.
    #[must_use]
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: true,
            status: DependencyStatus::Missing,
        }
    }

    /// An optional dependency, initially marked missing.
    #[must_use]
    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: false,
            status: DependencyStatus::Missing,
        }
    }

    /// Set the detected status.
    #[must_use]
    pub fn with_status(mut self, status: DependencyStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the status from an optional detected version.
    #[must_use]
    pub fn with_version(self, version: Option<String>) -> Self {
        match version {
            Some(version) => self.with_status(DependencyStatus::Present { version }),
            None => self.with_status(DependencyStatus::Missing),
        }
    }
}

/// Port for probing system dependencies.
///
/// Implementations perform active probing by executing commands. The core
/// domain uses this trait to remain pure and testable.
pub trait SystemProbePort: Send + Sync {
    /// Check all system dependencies and return their status.
    fn check_all_dependencies(&self) -> Vec<Dependency>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockSystemProbe {
        deps: Vec<Dependency>,
    }

    impl SystemProbePort for MockSystemProbe {
        fn check_all_dependencies(&self) -> Vec<Dependency> {
            self.deps.clone()
        }
    }

    #[test]
    fn test_mock_probe() {
        let probe = MockSystemProbe {
            deps: vec![
                Dependency::required("python3", "Bot interpreter")
                    .with_version(Some("3.12.1".to_string())),
                Dependency::optional("ffmpeg", "Voice playback"),
            ],
        };

        let deps = probe.check_all_dependencies();
        assert_eq!(deps.len(), 2);
        assert!(matches!(
            deps[0].status,
            DependencyStatus::Present { .. }
        ));
        assert_eq!(deps[1].status, DependencyStatus::Missing);
    }
}
