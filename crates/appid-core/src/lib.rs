pub mod config;
pub mod context;
pub mod platform;
pub mod resolver;
pub mod table;

pub use config::loader::{ConfigError, ConfigLoader};
pub use config::schema::AppIdConfig;
pub use context::{APP_ID_OUTPUT_KEY, Output, ResolutionContext};
pub use platform::Platform;
pub use resolver::{FallbackPolicy, ResolveError, Resolver, resolve};
pub use table::IdentifierTable;
