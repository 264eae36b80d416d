use crate::config::loader::ConfigError;
use crate::platform::Platform;
use crate::resolver::{FallbackPolicy, Resolver};
use crate::table::IdentifierTable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppIdConfig {
    #[serde(default)]
    pub fallback: FallbackConfig,
    #[serde(default = "IdentifierTable::builtin")]
    pub identifiers: IdentifierTable,
}

impl Default for AppIdConfig {
    fn default() -> Self {
        Self {
            fallback: FallbackConfig::default(),
            identifiers: IdentifierTable::builtin(),
        }
    }
}

impl AppIdConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.identifiers.validate()
    }

    pub fn into_resolver(self) -> Result<Resolver, ConfigError> {
        let policy = self.fallback.to_policy();
        Resolver::new(self.identifiers, policy)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    Default,
    Strict,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    #[serde(default)]
    pub policy: PolicyKind,
    /// Platform used for unrecognized values under the `default` policy.
    #[serde(default = "default_fallback_platform")]
    pub platform: Platform,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            platform: default_fallback_platform(),
        }
    }
}

impl FallbackConfig {
    /// Reject unrecognized platforms regardless of what the file says.
    pub fn force_strict(&mut self) {
        self.policy = PolicyKind::Strict;
    }

    pub fn to_policy(&self) -> FallbackPolicy {
        match self.policy {
            PolicyKind::Default => FallbackPolicy::Default(self.platform),
            PolicyKind::Strict => FallbackPolicy::Strict,
        }
    }
}

fn default_fallback_platform() -> Platform {
    Platform::Ios
}
