use crate::config::loader::ConfigError;
use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Package name of the Android app under test.
pub const ANDROID_APP_ID: &str = "io.appium.android.apis";

/// Bundle id of the iOS app under test.
pub const IOS_APP_ID: &str = "com.example.apple-samplecode.UICatalog";

/// Application identifiers indexed by platform.
///
/// Identifiers are opaque strings; a package name and a bundle id are
/// stored the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentifierTable {
    identifiers: BTreeMap<Platform, String>,
}

impl IdentifierTable {
    pub fn new() -> Self {
        Self {
            identifiers: BTreeMap::new(),
        }
    }

    /// The identifiers shipped with the sample flows.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert(Platform::Android, ANDROID_APP_ID);
        table.insert(Platform::Ios, IOS_APP_ID);
        table
    }

    /// Set the identifier for a platform.
    /// Returns the identifier it replaced, if any.
    pub fn insert(&mut self, platform: Platform, identifier: impl Into<String>) -> Option<String> {
        self.identifiers.insert(platform, identifier.into())
    }

    pub fn get(&self, platform: Platform) -> Option<&str> {
        self.identifiers.get(&platform).map(String::as_str)
    }

    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        self.identifiers.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> {
        self.identifiers
            .iter()
            .map(|(platform, identifier)| (*platform, identifier.as_str()))
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Check that every platform has a usable identifier.
    /// Blank strings count as missing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for platform in Platform::ALL {
            match self.get(platform) {
                Some(identifier) if !identifier.trim().is_empty() => {}
                _ => return Err(ConfigError::MissingIdentifier(platform)),
            }
        }
        Ok(())
    }
}
