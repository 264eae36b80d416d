use serde::{Deserialize, Serialize};

/// Name of the output field downstream flow steps read.
pub const APP_ID_OUTPUT_KEY: &str = "appIdUnderTest";

/// Input and output of a single resolution.
///
/// Created by the caller for one invocation; the resolver reads `platform`
/// and writes `app_id_under_test` through [`crate::Resolver::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionContext {
    pub platform: Option<String>,
    pub app_id_under_test: Option<String>,
}

impl ResolutionContext {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: Some(platform.into()),
            app_id_under_test: None,
        }
    }

    /// The written output, once resolution has succeeded.
    pub fn output(&self) -> Option<Output> {
        self.app_id_under_test
            .clone()
            .map(|app_id_under_test| Output { app_id_under_test })
    }
}

/// The value published to the harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    #[serde(rename = "appIdUnderTest")]
    pub app_id_under_test: String,
}

impl Output {
    /// `appIdUnderTest=<id>`, for shells and env files.
    pub fn to_env_line(&self) -> String {
        format!("{}={}", APP_ID_OUTPUT_KEY, self.app_id_under_test)
    }
}
