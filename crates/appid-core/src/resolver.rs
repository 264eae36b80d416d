use crate::config::loader::ConfigError;
use crate::context::ResolutionContext;
use crate::platform::Platform;
use crate::table::IdentifierTable;
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Unknown platform '{0}'")]
    UnknownPlatform(String),
    #[error("No platform was supplied")]
    MissingPlatform,
}

/// What happens to a platform value that is not a known key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Resolve unknown (and absent) values as this platform.
    Default(Platform),
    /// Reject unknown and absent values.
    Strict,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        FallbackPolicy::Default(Platform::Ios)
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackPolicy::Default(platform) => write!(f, "default ({})", platform),
            FallbackPolicy::Strict => f.write_str("strict"),
        }
    }
}

/// The two-way rule harness scripts use: `"android"` selects the Android
/// identifier, every other value selects the iOS one.
///
/// Returns `None` only when the table lacks the selected entry.
pub fn resolve<'a>(platform: &str, table: &'a IdentifierTable) -> Option<&'a str> {
    if platform == Platform::Android.as_str() {
        table.get(Platform::Android)
    } else {
        table.get(Platform::Ios)
    }
}

/// Maps platform values to application identifiers.
///
/// Holds a validated table and never mutates it, so a single resolver can
/// serve any number of contexts.
#[derive(Debug, Clone)]
pub struct Resolver {
    table: IdentifierTable,
    policy: FallbackPolicy,
}

impl Resolver {
    pub fn new(table: IdentifierTable, policy: FallbackPolicy) -> Result<Self, ConfigError> {
        table.validate()?;
        Ok(Self { table, policy })
    }

    /// Builtin identifiers, unknown values resolve as iOS.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(IdentifierTable::builtin(), FallbackPolicy::default())
    }

    pub fn table(&self) -> &IdentifierTable {
        &self.table
    }

    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    pub fn resolve(&self, platform: &str) -> Result<&str, ResolveError> {
        let target = match Platform::from_key(platform) {
            Some(known) => known,
            None => match self.policy {
                FallbackPolicy::Default(fallback) => {
                    debug!("Unrecognized platform '{}', using {}", platform, fallback);
                    fallback
                }
                FallbackPolicy::Strict => {
                    return Err(ResolveError::UnknownPlatform(platform.to_string()));
                }
            },
        };
        Ok(self.identifier(target))
    }

    /// Like [`Resolver::resolve`], for hosts that may not supply a platform at all.
    pub fn resolve_optional(&self, platform: Option<&str>) -> Result<&str, ResolveError> {
        match (platform, self.policy) {
            (Some(platform), _) => self.resolve(platform),
            (None, FallbackPolicy::Default(fallback)) => {
                debug!("No platform supplied, using {}", fallback);
                Ok(self.identifier(fallback))
            }
            (None, FallbackPolicy::Strict) => Err(ResolveError::MissingPlatform),
        }
    }

    /// Resolve the context's platform and write the result into its output slot.
    /// The slot is left untouched when resolution fails.
    pub fn apply(&self, context: &mut ResolutionContext) -> Result<&str, ResolveError> {
        let identifier = self.resolve_optional(context.platform.as_deref())?;
        context.app_id_under_test = Some(identifier.to_string());
        Ok(identifier)
    }

    // Only `new` builds a resolver and the table is never mutated afterwards,
    // so every platform has an entry here.
    fn identifier(&self, platform: Platform) -> &str {
        self.table.get(platform).unwrap_or_default()
    }
}
